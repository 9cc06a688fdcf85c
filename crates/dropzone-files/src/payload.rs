//! Payload encoding for accepted files.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::validate::FileDescriptor;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Which representations the host wants alongside each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub base64: bool,
    pub binary: bool,
}

impl ExportOptions {
    pub const NONE: Self = Self {
        base64: false,
        binary: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilePayload {
    /// `data:<mime>;base64,<data>` URL.
    pub base64: Option<String>,
    pub binary: Option<Vec<u8>>,
}

/// Encode file contents as a data URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn encode_payload(file: &FileDescriptor, bytes: &[u8], options: ExportOptions) -> FilePayload {
    if bytes.len() as u64 != file.size_bytes {
        tracing::warn!(
            "Payload for {:?} is {} bytes but the file reports {}",
            file.name,
            bytes.len(),
            file.size_bytes
        );
    }

    FilePayload {
        base64: options.base64.then(|| data_url(&file.mime, bytes)),
        binary: options.binary.then(|| bytes.to_vec()),
    }
}
