//! Section template shared by the text and DOCX renderers.
//!
//! Numbering, heading text and field order live here once; each renderer only
//! decides how to lay the entries out and which [`PresencePolicy`] to apply.

use crate::indictment::model::{FieldKey, Indictment};

pub const DOCUMENT_TITLE: &str = "ОБВИНИТЕЛЬНОЕ ЗАКЛЮЧЕНИЕ";
pub const APPENDICES_TITLE: &str = "ПРИЛОЖЕНИЯ";
pub const PLACEHOLDER: &str = "(не указано)";
pub const SIGNATURE_CAPTION: &str = "ПОДПИСЬ";
pub const SIGNATURE_LABEL: &str = "Подпись следователя";

pub const COMPILED_LABEL: &str = "Составлено";
pub const LOCATION_LABEL: &str = "Место";
pub const INVESTIGATOR_LABEL: &str = "Следователь";
pub const DATE_LABEL: &str = "Дата";

/// Whether a section belongs to the numbered body or to the appendices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Main(u8),
    Appendix(u8),
}

/// How one field is laid out inside its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// The value on its own.
    Bare(FieldKey),
    /// `label: value` on a single line.
    Inline(&'static str, FieldKey),
    /// `label:` on one line, the value below it.
    Stacked(&'static str, FieldKey),
}

impl Entry {
    pub fn field(&self) -> FieldKey {
        match *self {
            Entry::Bare(key) | Entry::Inline(_, key) | Entry::Stacked(_, key) => key,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: &'static str,
    pub entries: &'static [Entry],
}

/// What an empty field turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresencePolicy {
    /// Empty stays empty.
    Verbatim,
    /// Empty becomes [`PLACEHOLDER`].
    Placeholder,
}

impl PresencePolicy {
    pub fn apply<'a>(&self, value: &'a str) -> &'a str {
        match self {
            PresencePolicy::Verbatim => value,
            PresencePolicy::Placeholder if value.is_empty() => PLACEHOLDER,
            PresencePolicy::Placeholder => value,
        }
    }

    pub fn resolve<'a>(&self, record: &'a Indictment, key: FieldKey) -> &'a str {
        self.apply(record.field(key))
    }
}

pub static SECTIONS: [Section; 13] = [
    Section {
        kind: SectionKind::Main(1),
        heading: "1. ДАННЫЕ ОБ ОБВИНЯЕМОМ(-ЫХ)",
        entries: &[Entry::Bare(FieldKey::AccusedNames)],
    },
    Section {
        kind: SectionKind::Main(2),
        heading: "2. ДАННЫЕ О ЛИЧНОСТИ КАЖДОГО ИЗ НИХ",
        entries: &[Entry::Bare(FieldKey::PersonalData)],
    },
    Section {
        kind: SectionKind::Main(3),
        heading: "3. СУЩЕСТВО ОБВИНЕНИЯ",
        entries: &[
            Entry::Inline("Место совершения преступления", FieldKey::CrimeLocation),
            Entry::Inline("Время совершения преступления", FieldKey::CrimeTime),
            Entry::Inline("Способы совершения преступления", FieldKey::CrimeMethods),
            Entry::Inline("Мотивы совершения преступления", FieldKey::CrimeMotives),
            Entry::Inline("Цели совершения преступления", FieldKey::CrimeGoals),
            Entry::Inline("Последствия преступления", FieldKey::CrimeConsequences),
            Entry::Inline("Иные обстоятельства", FieldKey::OtherCircumstances),
            Entry::Stacked("Описание обвинения", FieldKey::ChargesDescription),
        ],
    },
    Section {
        kind: SectionKind::Main(4),
        heading: "4. ФОРМУЛИРОВКА ПРЕДЪЯВЛЕННОГО ОБВИНЕНИЯ",
        entries: &[Entry::Bare(FieldKey::CriminalCodeArticle)],
    },
    Section {
        kind: SectionKind::Main(5),
        heading: "5. ПЕРЕЧЕНЬ ДОКАЗАТЕЛЬСТВ, ПОДТВЕРЖДАЮЩИХ ОБВИНЕНИЕ",
        entries: &[Entry::Bare(FieldKey::ProsecutionEvidence)],
    },
    Section {
        kind: SectionKind::Main(6),
        heading: "6. ПЕРЕЧЕНЬ ДОКАЗАТЕЛЬСТВ, НА КОТОРЫЕ ССЫЛАЕТСЯ СТОРОНА ЗАЩИТЫ",
        entries: &[Entry::Bare(FieldKey::DefenseEvidence)],
    },
    Section {
        kind: SectionKind::Main(7),
        heading: "7. ОБСТОЯТЕЛЬСТВА, СМЯГЧАЮЩИЕ НАКАЗАНИЕ",
        entries: &[Entry::Bare(FieldKey::MitigatingCircumstances)],
    },
    Section {
        kind: SectionKind::Main(8),
        heading: "8. ОБСТОЯТЕЛЬСТВА, ОТЯГЧАЮЩИЕ НАКАЗАНИЕ",
        entries: &[Entry::Bare(FieldKey::AggravatingCircumstances)],
    },
    Section {
        kind: SectionKind::Main(9),
        heading: "9. ДАННЫЕ О ПОТЕРПЕВШЕМ И РАЗМЕР ПРИЧИНЕННОГО ВРЕДА",
        entries: &[
            Entry::Stacked("Данные о потерпевшем", FieldKey::VictimData),
            Entry::Stacked("Характер и размер причиненного вреда", FieldKey::DamageDescription),
        ],
    },
    Section {
        kind: SectionKind::Main(10),
        heading: "10. ДАННЫЕ О ГРАЖДАНСКОМ ИСТЦЕ И ГРАЖДАНСКОМ ОТВЕТЧИКЕ",
        entries: &[
            Entry::Stacked("Гражданский истец", FieldKey::CivilPlaintiff),
            Entry::Stacked("Гражданский ответчик", FieldKey::CivilDefendant),
            Entry::Stacked("Информация о гражданском иске", FieldKey::CivilClaim),
        ],
    },
    Section {
        kind: SectionKind::Main(11),
        heading: "11. ССЫЛКИ НА МАТЕРИАЛЫ ДЕЛА",
        entries: &[Entry::Bare(FieldKey::CaseReferences)],
    },
    Section {
        kind: SectionKind::Appendix(1),
        heading: "ПРИЛОЖЕНИЕ 1. СПИСОК ЛИЦ, ПОДЛЕЖАЩИХ ВЫЗОВУ В СУДЕБНОЕ ЗАСЕДАНИЕ",
        entries: &[
            Entry::Stacked("Со стороны обвинения", FieldKey::WitnessesProsecution),
            Entry::Stacked("Со стороны защиты", FieldKey::WitnessesDefense),
        ],
    },
    Section {
        kind: SectionKind::Appendix(2),
        heading: "ПРИЛОЖЕНИЕ 2. СПРАВКА",
        entries: &[
            Entry::Stacked("Сроки следствия", FieldKey::InvestigationTerms),
            Entry::Stacked("Избранные меры пресечения", FieldKey::PreventiveMeasures),
            Entry::Stacked("Вещественные доказательства", FieldKey::MaterialEvidence),
            Entry::Stacked(
                "Меры по обеспечению исполнения наказания в виде штрафа",
                FieldKey::PenaltyMeasures,
            ),
            Entry::Stacked("Процессуальные издержки", FieldKey::ProceduralCosts),
            Entry::Stacked("Меры по обеспечению прав иждивенцев", FieldKey::DependentsMeasures),
            Entry::Stacked("Информация для перечисления штрафа", FieldKey::FinePaymentInfo),
        ],
    },
];

/// Numbered body sections, in order.
pub fn main_sections() -> impl Iterator<Item = &'static Section> {
    SECTIONS
        .iter()
        .filter(|section| matches!(section.kind, SectionKind::Main(_)))
}

/// Appendix sections, in order.
pub fn appendix_sections() -> impl Iterator<Item = &'static Section> {
    SECTIONS
        .iter()
        .filter(|section| matches!(section.kind, SectionKind::Appendix(_)))
}

/// Every heading both renderers must emit, in document order.
pub fn headings() -> Vec<&'static str> {
    SECTIONS.iter().map(|section| section.heading).collect()
}
