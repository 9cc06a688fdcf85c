//! Dropzone Core
//!
//! This crate contains the shared foundations for the Dropzone widget crates:
//! logging bootstrap, profiling hooks, math re-exports and basic geometry.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
