//! Accepted-type lists.
//!
//! An accept list is the same comma-separated form an HTML file input takes:
//! `image/*,.pdf,application/json`. Entries are matched as a MIME category
//! wildcard, an exact MIME type, or a dotted extension.

use std::fmt;
use std::str::FromStr;

use dropzone_core::alloc::HashSet;

/// Parsed accept list. An empty list accepts every file.
#[derive(Debug, Clone, Default)]
pub struct AcceptedTypes {
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl AcceptedTypes {
    /// An unrestricted list.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn parse(list: &str) -> Self {
        let entries: Vec<String> = list
            .split(',')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        let lookup = entries.iter().cloned().collect();
        Self { entries, lookup }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether a file with this name and MIME type passes the list.
    ///
    /// A file without a MIME type is refused whenever the list is not empty,
    /// even if its extension would match.
    pub fn accepts(&self, name: &str, mime: &str) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        if mime.is_empty() {
            return false;
        }

        let mime = mime.to_lowercase();
        let category = mime.split('/').next().unwrap_or_default();
        let wildcard = format!("{category}/*");
        if self.lookup.contains(&wildcard) || self.lookup.contains(&mime) {
            return true;
        }

        let extension = name.rsplit('.').next().unwrap_or(name).to_lowercase();
        self.lookup.contains(&format!(".{extension}"))
    }

    /// The list rendered back as an `accept` attribute value.
    pub fn to_accept_attribute(&self) -> String {
        self.entries.join(",")
    }
}

impl PartialEq for AcceptedTypes {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AcceptedTypes {}

impl fmt::Display for AcceptedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unrestricted() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.entries.join(", "))
        }
    }
}

/// Named type presets offered by the widget's editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypePreset {
    #[default]
    Any,
    Image,
    Video,
    Audio,
    Pdf,
    Csv,
    Excel,
    Word,
    Json,
    /// A user-typed accept list.
    Custom(String),
}

impl TypePreset {
    /// Accept-list string for the preset. `Any` yields an empty list.
    pub fn accept_list(&self) -> &str {
        match self {
            TypePreset::Any => "",
            TypePreset::Image => "image/*",
            TypePreset::Video => "video/*",
            TypePreset::Audio => "audio/*",
            TypePreset::Pdf => ".pdf,application/pdf",
            TypePreset::Csv => ".csv,text/csv",
            TypePreset::Excel => {
                ".xls,.xlsx,application/vnd.ms-excel,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            TypePreset::Word => {
                ".doc,.docx,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            TypePreset::Json => ".json,application/json",
            TypePreset::Custom(list) => list.as_str(),
        }
    }

    pub fn accepted_types(&self) -> AcceptedTypes {
        AcceptedTypes::parse(self.accept_list())
    }

    /// Resolve the editor's `(preset, custom)` pair. Unknown preset names
    /// fall back to `Any`.
    pub fn from_editor(preset: &str, custom: &str) -> Self {
        match preset.parse::<TypePreset>() {
            Ok(TypePreset::Custom(_)) => TypePreset::Custom(custom.to_string()),
            Ok(preset) => preset,
            Err(()) => {
                tracing::warn!("Unknown file type preset {:?}, accepting any", preset);
                TypePreset::Any
            }
        }
    }
}

impl FromStr for TypePreset {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "" => Ok(TypePreset::Any),
            "image" => Ok(TypePreset::Image),
            "video" => Ok(TypePreset::Video),
            "audio" => Ok(TypePreset::Audio),
            "pdf" => Ok(TypePreset::Pdf),
            "csv" => Ok(TypePreset::Csv),
            "excel" => Ok(TypePreset::Excel),
            "word" => Ok(TypePreset::Word),
            "json" => Ok(TypePreset::Json),
            "custom" => Ok(TypePreset::Custom(String::new())),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let types = AcceptedTypes::parse(" Image/* , .PDF,,application/json ");
        assert_eq!(types.entries(), &["image/*", ".pdf", "application/json"]);
        assert_eq!(types.to_accept_attribute(), "image/*,.pdf,application/json");
    }

    #[test]
    fn test_empty_accepts_everything() {
        let types = AcceptedTypes::parse("");
        assert!(types.is_unrestricted());
        assert!(types.accepts("anything.bin", ""));
    }

    #[test]
    fn test_wildcard_exact_and_extension() {
        let types = AcceptedTypes::parse("image/*,application/json,.csv");
        assert!(types.accepts("a.png", "image/png"));
        assert!(types.accepts("data", "application/json"));
        assert!(types.accepts("table.CSV", "application/octet-stream"));
        assert!(!types.accepts("clip.mp4", "video/mp4"));
    }

    #[test]
    fn test_missing_mime_rejected_when_restricted() {
        let types = AcceptedTypes::parse(".csv");
        assert!(!types.accepts("table.csv", ""));
    }

    #[test]
    fn test_presets() {
        assert!(TypePreset::Image.accepted_types().accepts("x.webp", "image/webp"));
        assert!(TypePreset::Excel.accepted_types().accepts("book.xlsx", "application/zip"));
        assert!(!TypePreset::Pdf.accepted_types().accepts("x.png", "image/png"));
        assert!(TypePreset::Any.accepted_types().is_unrestricted());
    }

    #[test]
    fn test_from_editor() {
        assert_eq!(TypePreset::from_editor("word", ""), TypePreset::Word);
        assert_eq!(
            TypePreset::from_editor("custom", ".txt"),
            TypePreset::Custom(".txt".to_string())
        );
        assert_eq!(TypePreset::from_editor("spreadsheets", ""), TypePreset::Any);
    }
}
