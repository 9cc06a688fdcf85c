//! Per-file record kept by the list and reported to the host.

use crate::validate::FileDescriptor;

/// A file that passed validation, plus its upload bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDetails {
    pub name: String,
    pub mime: String,
    pub extension: String,
    pub size_bytes: u64,
    /// Size in megabytes, rounded to two decimals for display.
    pub size_mb: f64,
    pub last_modified_ms: u64,
    /// Percentage in `[0, 100]`.
    pub upload_progress: f32,
    pub is_uploading: bool,
    pub is_uploaded: bool,
}

impl FileDetails {
    pub fn from_descriptor(file: &FileDescriptor) -> Self {
        Self {
            name: file.name.clone(),
            mime: file.mime.clone(),
            extension: file.extension(),
            size_bytes: file.size_bytes,
            size_mb: (file.size_mb() * 100.0).round() / 100.0,
            last_modified_ms: file.last_modified_ms,
            upload_progress: 0.0,
            is_uploading: false,
            is_uploaded: false,
        }
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.upload_progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 100.0)
        };
    }

    pub fn set_status(&mut self, is_uploading: bool, is_uploaded: bool) {
        self.is_uploading = is_uploading;
        self.is_uploaded = is_uploaded;
    }
}
