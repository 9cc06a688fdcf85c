//! Dropzone Files - client-side file intake
//!
//! What the host runs on a native drop or file-picker change, after the drag
//! animation has done its part:
//! - Size, total-size, type and count validation
//! - Accepted-type lists and the editor's named presets
//! - Extension lookup from file names and MIME types
//! - A small file list model with upload progress bookkeeping
//! - Base64 data URL and binary payload encoding
//!
//! Nothing here touches the network.

pub mod accept;
pub mod details;
pub mod error;
pub mod list;
pub mod mime;
pub mod payload;
pub mod validate;

pub use accept::{AcceptedTypes, TypePreset};
pub use details::FileDetails;
pub use error::{FileListError, FileListResult, ValidationError, ValidationResult};
pub use list::{AddReport, FileList, FileListConfig, Rejection, UploadMode};
pub use mime::file_extension;
pub use payload::{ExportOptions, FilePayload, data_url, encode_payload};
pub use validate::{FileDescriptor, ValidationOptions, bytes_to_mb, validate_file};
