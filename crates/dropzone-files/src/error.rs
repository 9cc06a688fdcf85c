//! Error types for file intake.

use thiserror::Error;

/// Result type for single-file validation.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Result type for file list operations.
pub type FileListResult<T> = std::result::Result<T, FileListError>;

/// Why a file was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// File is smaller than the configured minimum.
    #[error("file size ({actual_mb:.2} MB) is less than the minimum allowed size ({min_mb} MB)")]
    BelowMinSize { min_mb: f64, actual_mb: f64 },

    /// File is larger than the configured maximum.
    #[error("file size ({actual_mb:.2} MB) exceeds the maximum allowed size ({max_mb} MB)")]
    AboveMaxSize { max_mb: f64, actual_mb: f64 },

    /// Accepting the file would push the list over its total size budget.
    #[error(
        "total file size ({resulting_total_mb:.2} MB) would exceed the maximum allowed ({max_total_mb} MB)"
    )]
    AboveMaxTotalSize {
        max_total_mb: f64,
        current_total_mb: f64,
        file_mb: f64,
        resulting_total_mb: f64,
    },

    /// File type matches none of the accepted entries.
    #[error("file type \"{mime}\" is not accepted. Allowed types: {allowed}")]
    InvalidType {
        allowed: String,
        mime: String,
        extension: String,
    },

    /// The list is already full.
    #[error("too many files: at most {max} allowed")]
    TooManyFiles { max: usize },
}

impl ValidationError {
    /// Stable constraint code reported to the host's error event.
    pub fn constraint(&self) -> &'static str {
        match self {
            ValidationError::BelowMinSize { .. } => "MIN_SIZE",
            ValidationError::AboveMaxSize { .. } => "MAX_SIZE",
            ValidationError::AboveMaxTotalSize { .. } => "MAX_TOTAL_SIZE",
            ValidationError::InvalidType { .. } => "INVALID_TYPE",
            ValidationError::TooManyFiles { .. } => "MAX_FILES",
        }
    }
}

/// Errors from [`FileList`](crate::list::FileList) bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileListError {
    #[error("no file at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
