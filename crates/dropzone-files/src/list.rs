//! The widget's file list.
//!
//! Holds accepted files in order, enforces the count limit and the running
//! total size, and tracks per-file upload progress reported by the host.

use dropzone_core::profiling::profile_function;

use crate::details::FileDetails;
use crate::error::{FileListError, FileListResult, ValidationError};
use crate::validate::{FileDescriptor, ValidationOptions, bytes_to_mb, validate_file};

pub const DEFAULT_MAX_FILES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    /// One file; a new drop replaces it.
    Single,
    #[default]
    Multi,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileListConfig {
    pub mode: UploadMode,
    /// Only used in [`UploadMode::Multi`].
    pub max_files: usize,
    pub validation: ValidationOptions,
}

impl Default for FileListConfig {
    fn default() -> Self {
        Self {
            mode: UploadMode::Multi,
            max_files: DEFAULT_MAX_FILES,
            validation: ValidationOptions::default(),
        }
    }
}

impl FileListConfig {
    pub fn single() -> Self {
        Self {
            mode: UploadMode::Single,
            ..Self::default()
        }
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    fn capacity(&self) -> usize {
        match self.mode {
            UploadMode::Single => 1,
            UploadMode::Multi => self.max_files,
        }
    }
}

/// A file that was turned away, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub name: String,
    pub error: ValidationError,
}

/// Outcome of one [`FileList::add_files`] call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddReport {
    pub accepted: Vec<FileDetails>,
    pub rejected: Vec<Rejection>,
}

impl AddReport {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileList {
    config: FileListConfig,
    files: Vec<FileDetails>,
}

impl FileList {
    pub fn new(config: FileListConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
        }
    }

    pub fn config(&self) -> &FileListConfig {
        &self.config
    }

    pub fn files(&self) -> &[FileDetails] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Unrounded total size of the held files in megabytes.
    pub fn total_size_mb(&self) -> f64 {
        bytes_to_mb(self.files.iter().map(|file| file.size_bytes).sum())
    }

    /// Validate and add incoming files.
    ///
    /// In single mode only the first incoming file is considered and, if
    /// valid, replaces whatever the list held. In multi mode files are taken
    /// in order until the list is full; each is checked against the running
    /// total including files accepted earlier in the same call.
    pub fn add_files(&mut self, incoming: impl IntoIterator<Item = FileDescriptor>) -> AddReport {
        profile_function!();

        let mut report = AddReport::default();
        let capacity = self.config.capacity();

        match self.config.mode {
            UploadMode::Single => {
                let mut incoming = incoming.into_iter();
                if let Some(first) = incoming.next() {
                    match validate_file(&first, &self.config.validation, 0.0) {
                        Ok(()) => {
                            let details = FileDetails::from_descriptor(&first);
                            self.files.clear();
                            self.files.push(details.clone());
                            report.accepted.push(details);
                        }
                        Err(error) => report.rejected.push(Rejection {
                            name: first.name,
                            error,
                        }),
                    }
                }
                for extra in incoming {
                    report.rejected.push(Rejection {
                        name: extra.name,
                        error: ValidationError::TooManyFiles { max: capacity },
                    });
                }
            }
            UploadMode::Multi => {
                for file in incoming {
                    if self.files.len() >= capacity {
                        report.rejected.push(Rejection {
                            name: file.name,
                            error: ValidationError::TooManyFiles { max: capacity },
                        });
                        continue;
                    }

                    match validate_file(&file, &self.config.validation, self.total_size_mb()) {
                        Ok(()) => {
                            let details = FileDetails::from_descriptor(&file);
                            self.files.push(details.clone());
                            report.accepted.push(details);
                        }
                        Err(error) => report.rejected.push(Rejection {
                            name: file.name,
                            error,
                        }),
                    }
                }
            }
        }

        for rejection in &report.rejected {
            tracing::debug!(
                "Rejected {:?} ({}): {}",
                rejection.name,
                rejection.error.constraint(),
                rejection.error
            );
        }
        if !report.accepted.is_empty() {
            tracing::debug!(
                "Accepted {} file(s), list now holds {} ({:.2} MB)",
                report.accepted.len(),
                self.files.len(),
                self.total_size_mb()
            );
        }

        report
    }

    pub fn remove(&mut self, index: usize) -> FileListResult<FileDetails> {
        self.check_index(index)?;
        Ok(self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn update_progress(&mut self, index: usize, progress: f32) -> FileListResult<()> {
        self.check_index(index)?;
        self.files[index].set_progress(progress);
        Ok(())
    }

    pub fn update_status(
        &mut self,
        index: usize,
        is_uploading: bool,
        is_uploaded: bool,
    ) -> FileListResult<()> {
        self.check_index(index)?;
        self.files[index].set_status(is_uploading, is_uploaded);
        Ok(())
    }

    fn check_index(&self, index: usize) -> FileListResult<()> {
        if index < self.files.len() {
            Ok(())
        } else {
            Err(FileListError::IndexOutOfRange {
                index,
                len: self.files.len(),
            })
        }
    }
}
