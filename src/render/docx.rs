//! DOCX packaging.
//!
//! Lowers [`Block`]s to WordprocessingML paragraphs and writes the minimal
//! set of package parts into a zip archive. Entries carry a fixed timestamp
//! so the same blocks always produce the same bytes.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::common::escape_xml;
use super::document::{Block, Signature, Spacing};
use super::template::{DATE_LABEL, LOCATION_LABEL, SIGNATURE_CAPTION, SIGNATURE_LABEL};
use super::RenderError;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman" w:eastAsia="Times New Roman" w:cs="Times New Roman"/><w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="ru-RU"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style></w:styles>"#;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

// A4 portrait with 3 cm / 1.5 cm / 2 cm margins.
const DOCUMENT_CLOSE: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1134" w:right="850" w:bottom="1134" w:left="1701" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr></w:body></w:document>"#;

const PAGE_BREAK_XML: &str = r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#;

const TITLE_SIZE: u32 = 28;
const HEADING_SIZE: u32 = 24;
const BODY_SIZE: u32 = 22;
const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Center,
}

/// Character formatting of a paragraph's single run. Sizes are in half-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunStyle {
    bold: bool,
    underline: bool,
    size: u32,
}

impl RunStyle {
    const fn plain() -> Self {
        Self {
            bold: false,
            underline: false,
            size: BODY_SIZE,
        }
    }

    const fn bold(size: u32) -> Self {
        Self {
            bold: true,
            underline: false,
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Paragraph {
    text: String,
    style: RunStyle,
    alignment: Alignment,
    spacing: Spacing,
}

impl Paragraph {
    fn left(text: impl Into<String>, style: RunStyle, spacing: Spacing) -> Self {
        Self {
            text: text.into(),
            style,
            alignment: Alignment::Left,
            spacing,
        }
    }

    fn centered(text: impl Into<String>, style: RunStyle, spacing: Spacing) -> Self {
        Self {
            text: text.into(),
            style,
            alignment: Alignment::Center,
            spacing,
        }
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:p><w:pPr>");
        out.push_str(&format!(
            r#"<w:spacing w:before="{}" w:after="{}""#,
            self.spacing.before, self.spacing.after
        ));
        if let Some(line) = self.spacing.line {
            out.push_str(&format!(r#" w:line="{}" w:lineRule="auto""#, line));
        }
        out.push_str("/>");
        if self.alignment == Alignment::Center {
            out.push_str(r#"<w:jc w:val="center"/>"#);
        }
        out.push_str("</w:pPr><w:r><w:rPr>");
        if self.style.bold {
            out.push_str("<w:b/><w:bCs/>");
        }
        out.push_str(&format!(
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
            self.style.size
        ));
        if self.style.underline {
            out.push_str(r#"<w:u w:val="single"/>"#);
        }
        out.push_str("</w:rPr>");

        for (index, line) in self.text.split('\n').enumerate() {
            if index > 0 {
                out.push_str("<w:br/>");
            }
            for (column, segment) in line.trim_end_matches('\r').split('\t').enumerate() {
                if column > 0 {
                    out.push_str("<w:tab/>");
                }
                out.push_str(r#"<w:t xml:space="preserve">"#);
                out.push_str(&escape_xml(segment));
                out.push_str("</w:t>");
            }
        }

        out.push_str("</w:r></w:p>");
    }
}

fn signature_paragraphs(signature: &Signature) -> Vec<Paragraph> {
    vec![
        Paragraph::centered(
            SIGNATURE_CAPTION,
            RunStyle::bold(BODY_SIZE),
            Spacing::new(400, 600),
        ),
        Paragraph::centered("_".repeat(RULE_WIDTH), RunStyle::plain(), Spacing::new(0, 100)),
        Paragraph::centered(SIGNATURE_LABEL, RunStyle::plain(), Spacing::new(100, 600)),
        Paragraph::centered(
            format!("{}: {}", DATE_LABEL, signature.date),
            RunStyle::plain(),
            Spacing::new(0, 100),
        ),
        Paragraph::centered(
            format!("{}: {}", LOCATION_LABEL, signature.location),
            RunStyle::plain(),
            Spacing::new(0, 0),
        ),
    ]
}

/// Serialize blocks into the body of `word/document.xml`.
pub fn document_xml(blocks: &[Block]) -> String {
    let mut out = String::from(DOCUMENT_OPEN);

    for block in blocks {
        match block {
            Block::Title { text, spacing } => {
                Paragraph::centered(text.as_str(), RunStyle::bold(TITLE_SIZE), *spacing)
                    .write_xml(&mut out)
            }
            Block::Heading { text } => Paragraph::left(
                text.as_str(),
                RunStyle {
                    bold: true,
                    underline: true,
                    size: HEADING_SIZE,
                },
                Spacing::new(200, 200),
            )
            .write_xml(&mut out),
            Block::Label { text } => Paragraph::left(
                text.as_str(),
                RunStyle::bold(BODY_SIZE),
                Spacing::new(100, 100),
            )
            .write_xml(&mut out),
            Block::Body { text, spacing } => {
                Paragraph::left(text.as_str(), RunStyle::plain(), *spacing).write_xml(&mut out)
            }
            Block::PageBreak => out.push_str(PAGE_BREAK_XML),
            Block::Signature(signature) => {
                for paragraph in signature_paragraphs(signature) {
                    paragraph.write_xml(&mut out);
                }
            }
        }
    }

    out.push_str(DOCUMENT_CLOSE);
    out
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

/// Write the complete DOCX package for the given blocks.
pub fn package(blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
    let document = document_xml(blocks);
    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", ROOT_RELS_XML),
        ("word/document.xml", document.as_str()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
        ("word/styles.xml", STYLES_XML),
    ];

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer.start_file(name, entry_options())?;
        writer.write_all(content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
