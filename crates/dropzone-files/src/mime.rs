//! Extension lookup from file names, falling back to MIME types.

/// Extensions for MIME types whose subtype is not already the extension.
const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("application/pdf", "pdf"),
    ("text/csv", "csv"),
    ("application/vnd.ms-excel", "xls"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xlsx",
    ),
    ("application/msword", "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
    ("application/json", "json"),
    ("text/plain", "txt"),
];

/// Lowercase extension (without the dot) for a file.
///
/// Uses the text after the last dot of `name` when there is one, then the
/// known-MIME table, then the MIME subtype. Returns an empty string when
/// neither gives an answer.
pub fn file_extension(name: &str, mime: &str) -> String {
    if let Some((_, ext)) = name.rsplit_once('.') {
        return ext.to_lowercase();
    }

    if mime.is_empty() {
        return String::new();
    }

    MIME_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == mime)
        .map(|(_, ext)| (*ext).to_string())
        .unwrap_or_else(|| mime.rsplit('/').next().unwrap_or(mime).to_string())
}
