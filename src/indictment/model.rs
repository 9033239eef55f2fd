use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// An indictment record as entered by the investigator.
///
/// Every text field defaults to an empty string and `completion_date`
/// defaults to today. Unknown keys are rejected rather than dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Indictment {
    #[schema(example = "Иванов Иван Иванович")]
    pub accused_names: String,
    pub personal_data: String,
    pub charges_description: String,
    pub crime_location: String,
    pub crime_time: String,
    pub crime_methods: String,
    pub crime_motives: String,
    pub crime_goals: String,
    pub crime_consequences: String,
    pub other_circumstances: String,
    #[schema(example = "ч.1 ст.158 УК РФ")]
    pub criminal_code_article: String,
    pub prosecution_evidence: String,
    pub defense_evidence: String,
    pub mitigating_circumstances: String,
    pub aggravating_circumstances: String,
    pub victim_data: String,
    pub damage_description: String,
    pub civil_plaintiff: String,
    pub civil_defendant: String,
    pub case_references: String,
    pub investigator_name: String,
    pub completion_location: String,
    #[schema(example = "2024-01-15")]
    pub completion_date: NaiveDate,
    pub witnesses_prosecution: String,
    pub witnesses_defense: String,
    pub investigation_terms: String,
    pub preventive_measures: String,
    pub material_evidence: String,
    pub civil_claim: String,
    pub penalty_measures: String,
    pub procedural_costs: String,
    pub dependents_measures: String,
    pub fine_payment_info: String,
}

impl Default for Indictment {
    fn default() -> Self {
        Self {
            accused_names: String::new(),
            personal_data: String::new(),
            charges_description: String::new(),
            crime_location: String::new(),
            crime_time: String::new(),
            crime_methods: String::new(),
            crime_motives: String::new(),
            crime_goals: String::new(),
            crime_consequences: String::new(),
            other_circumstances: String::new(),
            criminal_code_article: String::new(),
            prosecution_evidence: String::new(),
            defense_evidence: String::new(),
            mitigating_circumstances: String::new(),
            aggravating_circumstances: String::new(),
            victim_data: String::new(),
            damage_description: String::new(),
            civil_plaintiff: String::new(),
            civil_defendant: String::new(),
            case_references: String::new(),
            investigator_name: String::new(),
            completion_location: String::new(),
            completion_date: Local::now().date_naive(),
            witnesses_prosecution: String::new(),
            witnesses_defense: String::new(),
            investigation_terms: String::new(),
            preventive_measures: String::new(),
            material_evidence: String::new(),
            civil_claim: String::new(),
            penalty_measures: String::new(),
            procedural_costs: String::new(),
            dependents_measures: String::new(),
            fine_payment_info: String::new(),
        }
    }
}

impl Indictment {
    /// Read a free-text field by key.
    pub fn field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::AccusedNames => &self.accused_names,
            FieldKey::PersonalData => &self.personal_data,
            FieldKey::ChargesDescription => &self.charges_description,
            FieldKey::CrimeLocation => &self.crime_location,
            FieldKey::CrimeTime => &self.crime_time,
            FieldKey::CrimeMethods => &self.crime_methods,
            FieldKey::CrimeMotives => &self.crime_motives,
            FieldKey::CrimeGoals => &self.crime_goals,
            FieldKey::CrimeConsequences => &self.crime_consequences,
            FieldKey::OtherCircumstances => &self.other_circumstances,
            FieldKey::CriminalCodeArticle => &self.criminal_code_article,
            FieldKey::ProsecutionEvidence => &self.prosecution_evidence,
            FieldKey::DefenseEvidence => &self.defense_evidence,
            FieldKey::MitigatingCircumstances => &self.mitigating_circumstances,
            FieldKey::AggravatingCircumstances => &self.aggravating_circumstances,
            FieldKey::VictimData => &self.victim_data,
            FieldKey::DamageDescription => &self.damage_description,
            FieldKey::CivilPlaintiff => &self.civil_plaintiff,
            FieldKey::CivilDefendant => &self.civil_defendant,
            FieldKey::CaseReferences => &self.case_references,
            FieldKey::InvestigatorName => &self.investigator_name,
            FieldKey::CompletionLocation => &self.completion_location,
            FieldKey::WitnessesProsecution => &self.witnesses_prosecution,
            FieldKey::WitnessesDefense => &self.witnesses_defense,
            FieldKey::InvestigationTerms => &self.investigation_terms,
            FieldKey::PreventiveMeasures => &self.preventive_measures,
            FieldKey::MaterialEvidence => &self.material_evidence,
            FieldKey::CivilClaim => &self.civil_claim,
            FieldKey::PenaltyMeasures => &self.penalty_measures,
            FieldKey::ProceduralCosts => &self.procedural_costs,
            FieldKey::DependentsMeasures => &self.dependents_measures,
            FieldKey::FinePaymentInfo => &self.fine_payment_info,
        }
    }

    /// Headline used when listing saved records.
    pub fn title(&self) -> &str {
        if self.accused_names.trim().is_empty() {
            "Без названия"
        } else {
            &self.accused_names
        }
    }
}

/// Keys of the free-text fields of [`Indictment`].
///
/// `completion_date` is typed and therefore not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    AccusedNames,
    PersonalData,
    ChargesDescription,
    CrimeLocation,
    CrimeTime,
    CrimeMethods,
    CrimeMotives,
    CrimeGoals,
    CrimeConsequences,
    OtherCircumstances,
    CriminalCodeArticle,
    ProsecutionEvidence,
    DefenseEvidence,
    MitigatingCircumstances,
    AggravatingCircumstances,
    VictimData,
    DamageDescription,
    CivilPlaintiff,
    CivilDefendant,
    CaseReferences,
    InvestigatorName,
    CompletionLocation,
    WitnessesProsecution,
    WitnessesDefense,
    InvestigationTerms,
    PreventiveMeasures,
    MaterialEvidence,
    CivilClaim,
    PenaltyMeasures,
    ProceduralCosts,
    DependentsMeasures,
    FinePaymentInfo,
}

impl FieldKey {
    pub const ALL: [FieldKey; 32] = [
        Self::AccusedNames,
        Self::PersonalData,
        Self::ChargesDescription,
        Self::CrimeLocation,
        Self::CrimeTime,
        Self::CrimeMethods,
        Self::CrimeMotives,
        Self::CrimeGoals,
        Self::CrimeConsequences,
        Self::OtherCircumstances,
        Self::CriminalCodeArticle,
        Self::ProsecutionEvidence,
        Self::DefenseEvidence,
        Self::MitigatingCircumstances,
        Self::AggravatingCircumstances,
        Self::VictimData,
        Self::DamageDescription,
        Self::CivilPlaintiff,
        Self::CivilDefendant,
        Self::CaseReferences,
        Self::InvestigatorName,
        Self::CompletionLocation,
        Self::WitnessesProsecution,
        Self::WitnessesDefense,
        Self::InvestigationTerms,
        Self::PreventiveMeasures,
        Self::MaterialEvidence,
        Self::CivilClaim,
        Self::PenaltyMeasures,
        Self::ProceduralCosts,
        Self::DependentsMeasures,
        Self::FinePaymentInfo,
    ];

    /// Column name used on the wire and in the row store.
    pub fn name(self) -> &'static str {
        match self {
            Self::AccusedNames => "accused_names",
            Self::PersonalData => "personal_data",
            Self::ChargesDescription => "charges_description",
            Self::CrimeLocation => "crime_location",
            Self::CrimeTime => "crime_time",
            Self::CrimeMethods => "crime_methods",
            Self::CrimeMotives => "crime_motives",
            Self::CrimeGoals => "crime_goals",
            Self::CrimeConsequences => "crime_consequences",
            Self::OtherCircumstances => "other_circumstances",
            Self::CriminalCodeArticle => "criminal_code_article",
            Self::ProsecutionEvidence => "prosecution_evidence",
            Self::DefenseEvidence => "defense_evidence",
            Self::MitigatingCircumstances => "mitigating_circumstances",
            Self::AggravatingCircumstances => "aggravating_circumstances",
            Self::VictimData => "victim_data",
            Self::DamageDescription => "damage_description",
            Self::CivilPlaintiff => "civil_plaintiff",
            Self::CivilDefendant => "civil_defendant",
            Self::CaseReferences => "case_references",
            Self::InvestigatorName => "investigator_name",
            Self::CompletionLocation => "completion_location",
            Self::WitnessesProsecution => "witnesses_prosecution",
            Self::WitnessesDefense => "witnesses_defense",
            Self::InvestigationTerms => "investigation_terms",
            Self::PreventiveMeasures => "preventive_measures",
            Self::MaterialEvidence => "material_evidence",
            Self::CivilClaim => "civil_claim",
            Self::PenaltyMeasures => "penalty_measures",
            Self::ProceduralCosts => "procedural_costs",
            Self::DependentsMeasures => "dependents_measures",
            Self::FinePaymentInfo => "fine_payment_info",
        }
    }
}

/// A record as held by the row store, with store-assigned metadata.
///
/// Rows are decoded leniently: a null column falls back to the field default
/// and columns the record does not know are ignored. Request bodies go
/// through the strict [`Indictment`] decoder instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StoredIndictment {
    #[schema(example = "f1e2d3c4-b5a6-7890-1234-567890abcdef")]
    pub id: Uuid,
    #[serde(flatten, deserialize_with = "indictment_from_row")]
    pub indictment: Indictment,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn is_record_column(column: &str) -> bool {
    column == "completion_date" || FieldKey::ALL.iter().any(|key| key.name() == column)
}

fn indictment_from_row<'de, D>(deserializer: D) -> Result<Indictment, D::Error>
where
    D: Deserializer<'de>,
{
    let mut columns = Map::<String, Value>::deserialize(deserializer)?;
    columns.retain(|column, value| !value.is_null() && is_record_column(column));
    Indictment::deserialize(Value::Object(columns)).map_err(de::Error::custom)
}
