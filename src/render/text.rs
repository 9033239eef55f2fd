//! Plain-text rendering.
//!
//! Values are interpolated as-is: an empty field leaves an empty line or an
//! empty tail after its label, never a placeholder.

use crate::indictment::model::{FieldKey, Indictment};

use super::template::{
    appendix_sections, main_sections, Entry, PresencePolicy, Section, APPENDICES_TITLE,
    COMPILED_LABEL, DOCUMENT_TITLE, INVESTIGATOR_LABEL, LOCATION_LABEL, SIGNATURE_LABEL,
};

const POLICY: PresencePolicy = PresencePolicy::Verbatim;
const SIGNATURE_RULE: &str = "___________________________";

/// Render a record as a single flat text document.
pub fn render_text(record: &Indictment) -> String {
    let mut lines: Vec<String> = vec![
        DOCUMENT_TITLE.to_string(),
        String::new(),
        format!("{}: {}", COMPILED_LABEL, record.completion_date),
        format!(
            "{}: {}",
            LOCATION_LABEL,
            POLICY.resolve(record, FieldKey::CompletionLocation)
        ),
        format!(
            "{}: {}",
            INVESTIGATOR_LABEL,
            POLICY.resolve(record, FieldKey::InvestigatorName)
        ),
    ];

    for section in main_sections() {
        push_section(&mut lines, section, record);
    }

    lines.push(String::new());
    lines.push(APPENDICES_TITLE.to_string());

    for section in appendix_sections() {
        push_section(&mut lines, section, record);
    }

    lines.push(String::new());
    lines.push(SIGNATURE_RULE.to_string());
    lines.push(SIGNATURE_LABEL.to_string());

    let text = lines.join("\n").trim().to_string();
    log::debug!("Rendered indictment text ({} bytes)", text.len());
    text
}

fn push_section(lines: &mut Vec<String>, section: &Section, record: &Indictment) {
    lines.push(String::new());
    lines.push(section.heading.to_string());

    for entry in section.entries {
        match *entry {
            Entry::Bare(key) => lines.push(POLICY.resolve(record, key).to_string()),
            Entry::Inline(label, key) => {
                lines.push(format!("{}: {}", label, POLICY.resolve(record, key)))
            }
            Entry::Stacked(label, key) => {
                lines.push(String::new());
                lines.push(format!("{}:", label));
                lines.push(POLICY.resolve(record, key).to_string());
            }
        }
    }
}
