//! Collection types used across the Dropzone crates.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
