//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use indictment_docs::indictment::Indictment;

/// A record with every text field empty and a fixed completion date.
pub fn empty_record(date: &str) -> Indictment {
    Indictment {
        completion_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        ..Default::default()
    }
}

/// The record from the end-to-end scenario: two filled fields, the rest empty.
pub fn scenario_record() -> Indictment {
    Indictment {
        accused_names: "Иванов И.И.".to_string(),
        criminal_code_article: "ч.1 ст.158 УК РФ".to_string(),
        ..empty_record("2024-01-15")
    }
}

/// Extract `word/document.xml` from a DOCX package.
pub fn document_xml(docx: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx.to_vec())).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

/// Plain text of each `<w:p>` paragraph, with line breaks as `\n`.
pub fn paragraph_texts(xml: &str) -> Vec<String> {
    xml.split("<w:p>")
        .skip(1)
        .map(|paragraph| {
            paragraph
                .split("<w:t xml:space=\"preserve\">")
                .skip(1)
                .filter_map(|piece| piece.find("</w:t>").map(|end| &piece[..end]))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}
