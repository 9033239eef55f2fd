//! Render module - turns an indictment record into downloadable documents.
//!
//! Two renderers share one section template:
//! - `text` - flat UTF-8 text, empty fields interpolated as-is
//! - `document` - block layout packaged as DOCX, empty fields shown as `(не указано)`

pub mod common;
pub mod document;
pub mod docx;
pub mod template;
pub mod text;

pub use common::{export_filename, ExportFormat};
pub use document::{build_blocks, render_document, Block};
pub use template::{headings, PLACEHOLDER};
pub use text::render_text;

use thiserror::Error;

use crate::indictment::model::Indictment;

/// Errors that can occur while packaging a formatted document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to write DOCX part: {0}")]
    Io(#[from] std::io::Error),
    #[error("DOCX packaging task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Render the plain-text export of a record.
pub fn export_text(record: &Indictment) -> RenderedDocument {
    let format = ExportFormat::Text;
    RenderedDocument {
        filename: export_filename(record, format),
        media_type: format.media_type(),
        bytes: render_text(record).into_bytes(),
    }
}

/// Render the DOCX export of a record.
pub async fn export_document(record: &Indictment) -> Result<RenderedDocument, RenderError> {
    let format = ExportFormat::Docx;
    let bytes = render_document(record).await?;
    Ok(RenderedDocument {
        filename: export_filename(record, format),
        media_type: format.media_type(),
        bytes,
    })
}

/// Render a record in the requested format.
pub async fn export(
    record: &Indictment,
    format: ExportFormat,
) -> Result<RenderedDocument, RenderError> {
    match format {
        ExportFormat::Text => Ok(export_text(record)),
        ExportFormat::Docx => export_document(record).await,
    }
}
