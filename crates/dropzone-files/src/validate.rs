//! Per-file validation against size, total size and type constraints.

use crate::accept::AcceptedTypes;
use crate::error::{ValidationError, ValidationResult};
use crate::mime::file_extension;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// What the host knows about a dropped or picked file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDescriptor {
    pub name: String,
    /// May be empty when the platform could not tell.
    pub mime: String,
    pub size_bytes: u64,
    /// Milliseconds since the Unix epoch.
    pub last_modified_ms: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size_bytes,
            last_modified_ms: 0,
        }
    }

    pub fn with_last_modified(mut self, last_modified_ms: u64) -> Self {
        self.last_modified_ms = last_modified_ms;
        self
    }

    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size_bytes)
    }

    pub fn extension(&self) -> String {
        file_extension(&self.name, &self.mime)
    }
}

/// Limits applied to each incoming file.
///
/// A limit of `None`, zero or a negative value is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOptions {
    pub min_file_size_mb: Option<f64>,
    pub max_file_size_mb: Option<f64>,
    pub max_total_size_mb: Option<f64>,
    pub accepted: AcceptedTypes,
}

impl Default for ValidationOptions {
    /// The widget's out-of-the-box limits: 10 MB per file, 50 MB in total.
    fn default() -> Self {
        Self {
            min_file_size_mb: None,
            max_file_size_mb: Some(10.0),
            max_total_size_mb: Some(50.0),
            accepted: AcceptedTypes::any(),
        }
    }
}

impl ValidationOptions {
    /// No limits at all.
    pub fn unrestricted() -> Self {
        Self {
            min_file_size_mb: None,
            max_file_size_mb: None,
            max_total_size_mb: None,
            accepted: AcceptedTypes::any(),
        }
    }

    pub fn with_min_file_size_mb(mut self, mb: f64) -> Self {
        self.min_file_size_mb = Some(mb);
        self
    }

    pub fn with_max_file_size_mb(mut self, mb: f64) -> Self {
        self.max_file_size_mb = Some(mb);
        self
    }

    pub fn with_max_total_size_mb(mut self, mb: f64) -> Self {
        self.max_total_size_mb = Some(mb);
        self
    }

    pub fn with_accepted(mut self, accepted: AcceptedTypes) -> Self {
        self.accepted = accepted;
        self
    }
}

fn enabled(limit: Option<f64>) -> Option<f64> {
    limit.filter(|mb| *mb > 0.0)
}

/// Check one file. `current_total_mb` is the size already held by the list.
///
/// Constraints are checked in order min size, max size, max total, type; the
/// first failure is returned.
pub fn validate_file(
    file: &FileDescriptor,
    options: &ValidationOptions,
    current_total_mb: f64,
) -> ValidationResult<()> {
    let file_mb = file.size_mb();

    if let Some(min_mb) = enabled(options.min_file_size_mb)
        && file_mb < min_mb
    {
        return Err(ValidationError::BelowMinSize {
            min_mb,
            actual_mb: file_mb,
        });
    }

    if let Some(max_mb) = enabled(options.max_file_size_mb)
        && file_mb > max_mb
    {
        return Err(ValidationError::AboveMaxSize {
            max_mb,
            actual_mb: file_mb,
        });
    }

    if let Some(max_total_mb) = enabled(options.max_total_size_mb) {
        let resulting_total_mb = current_total_mb + file_mb;
        if resulting_total_mb > max_total_mb {
            return Err(ValidationError::AboveMaxTotalSize {
                max_total_mb,
                current_total_mb,
                file_mb,
                resulting_total_mb,
            });
        }
    }

    if !options.accepted.accepts(&file.name, &file.mime) {
        return Err(ValidationError::InvalidType {
            allowed: options.accepted.to_string(),
            mime: if file.mime.is_empty() {
                "unknown".to_string()
            } else {
                file.mime.clone()
            },
            extension: file.extension(),
        });
    }

    Ok(())
}
