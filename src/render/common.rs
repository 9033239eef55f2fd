//! Common utilities for document export.
//!
//! Shared helpers for output filenames, media types and XML text escaping.

use crate::indictment::model::Indictment;

/// Prefix of every exported file name.
pub const EXPORT_PREFIX: &str = "obvinitelnoye_zaklyuchenie";

/// Output encodings offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Docx => "docx",
        }
    }

    /// Get MIME type for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Parse from extension string.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Some(Self::Text),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Download name for a record, e.g. `obvinitelnoye_zaklyuchenie_2024-03-01.docx`.
pub fn export_filename(record: &Indictment, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_PREFIX,
        record.completion_date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Escape text for use inside an XML element or attribute.
///
/// Characters that XML 1.0 cannot carry at all are dropped.
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(ch),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}
