//! Formatted-document rendering.
//!
//! A record is first laid out as an ordered list of [`Block`]s and then
//! packaged as a DOCX file by [`super::docx`]. Every empty field is replaced
//! by the placeholder text.

use crate::indictment::model::{FieldKey, Indictment};

use super::docx;
use super::template::{
    appendix_sections, main_sections, Entry, PresencePolicy, Section, SectionKind,
    APPENDICES_TITLE, COMPILED_LABEL, DOCUMENT_TITLE, INVESTIGATOR_LABEL, LOCATION_LABEL,
};
use super::RenderError;

const POLICY: PresencePolicy = PresencePolicy::Placeholder;

/// Paragraph spacing in twentieths of a point; `line` is in 240ths of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
    pub line: Option<u32>,
}

impl Spacing {
    pub const fn new(before: u32, after: u32) -> Self {
        Self {
            before,
            after,
            line: None,
        }
    }

    /// One-and-a-half line spacing used for field content.
    pub const fn body(after: u32) -> Self {
        Self {
            before: 0,
            after,
            line: Some(360),
        }
    }
}

/// Signature group closing the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub date: String,
    pub location: String,
}

/// One unit of formatted-document structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered, bold, largest size.
    Title { text: String, spacing: Spacing },
    /// Bold, underlined section heading.
    Heading { text: String },
    /// Bold caption above a stacked value.
    Label { text: String },
    /// Field content or plain line.
    Body { text: String, spacing: Spacing },
    PageBreak,
    Signature(Signature),
}

impl Block {
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            Block::Heading { text } => Some(text),
            _ => None,
        }
    }
}

/// Lay out a record as blocks, in final document order.
pub fn build_blocks(record: &Indictment) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title {
            text: DOCUMENT_TITLE.to_string(),
            spacing: Spacing::new(0, 400),
        },
        Block::Body {
            text: format!("{}: {}", COMPILED_LABEL, record.completion_date),
            spacing: Spacing::new(0, 100),
        },
        Block::Body {
            text: format!(
                "{}: {}",
                LOCATION_LABEL,
                POLICY.resolve(record, FieldKey::CompletionLocation)
            ),
            spacing: Spacing::new(0, 100),
        },
        Block::Body {
            text: format!(
                "{}: {}",
                INVESTIGATOR_LABEL,
                POLICY.resolve(record, FieldKey::InvestigatorName)
            ),
            spacing: Spacing::new(0, 400),
        },
    ];

    for section in main_sections() {
        push_section(&mut blocks, section, record);
    }

    for section in appendix_sections() {
        blocks.push(Block::PageBreak);
        if section.kind == SectionKind::Appendix(1) {
            blocks.push(Block::Title {
                text: APPENDICES_TITLE.to_string(),
                spacing: Spacing::new(200, 400),
            });
        }
        push_section(&mut blocks, section, record);
    }

    blocks.push(Block::PageBreak);
    blocks.push(Block::Signature(Signature {
        date: record.completion_date.to_string(),
        location: POLICY
            .resolve(record, FieldKey::CompletionLocation)
            .to_string(),
    }));

    blocks
}

fn push_section(blocks: &mut Vec<Block>, section: &Section, record: &Indictment) {
    blocks.push(Block::Heading {
        text: section.heading.to_string(),
    });

    let last = section.entries.len().saturating_sub(1);
    for (index, entry) in section.entries.iter().enumerate() {
        let closing = index == last;
        match *entry {
            Entry::Bare(key) => blocks.push(Block::Body {
                text: POLICY.resolve(record, key).to_string(),
                spacing: Spacing::body(if closing { 200 } else { 0 }),
            }),
            Entry::Inline(label, key) => blocks.push(Block::Body {
                text: format!("{}: {}", label, POLICY.resolve(record, key)),
                spacing: Spacing::body(if closing { 400 } else { 0 }),
            }),
            Entry::Stacked(label, key) => {
                blocks.push(Block::Label {
                    text: format!("{}:", label),
                });
                blocks.push(Block::Body {
                    text: POLICY.resolve(record, key).to_string(),
                    spacing: Spacing::body(if closing { 400 } else { 200 }),
                });
            }
        }
    }
}

/// Render a record as DOCX bytes.
///
/// Zip packaging runs on the blocking pool; the returned future resolves once
/// the archive is complete.
pub async fn render_document(record: &Indictment) -> Result<Vec<u8>, RenderError> {
    let blocks = build_blocks(record);
    log::debug!("Packaging indictment document ({} blocks)", blocks.len());

    let bytes = tokio::task::spawn_blocking(move || docx::package(&blocks)).await??;

    log::debug!("Packaged indictment document ({} bytes)", bytes.len());
    Ok(bytes)
}
