//! Source column names and named projections.
//!
//! Column names match the header row of the cohort spreadsheet export
//! exactly (case and spacing included).

use std::fmt;

pub const ID: &str = "id";
pub const INITIALS: &str = "Initials";
pub const AGE: &str = "Age";
pub const GENDER: &str = "Gender";
pub const BMI: &str = "BMI";
pub const DATE_OF_INSERTION: &str = "Date of prosthesis insertion";
pub const DATE_OF_ONSET: &str = "Date of symptom onset";
pub const DATE_OF_SCAN: &str = "Date of scan";
pub const BONE_SCAN_RESULT: &str = "Result of bone scan";
pub const ORTHO_DECISION: &str = "Ortho Decision";
pub const COMORBIDITIES: &str = "Comorbidities";
pub const FOV: &str = "FOV";
pub const PROSTHESIS_LOCATION: &str = "Prosthesis Location";
pub const NEGATIVE_SCAN_OUTCOME: &str = "Negative Scan Outcome";
pub const POSITIVE_SCAN_OUTCOME: &str = "Positive Scan Outcome";
pub const REASON_FOR_INTERVENTION: &str = "Reason for intervention";
pub const REASON_FOR_NO_INTERVENTION: &str = "Reason for no intervention";
pub const ADDITIONAL_INFORMATION: &str = "Additional information";

const OBJECTIVE_COLUMNS: &[&str] = &[
    ID,
    INITIALS,
    AGE,
    GENDER,
    BMI,
    DATE_OF_INSERTION,
    DATE_OF_ONSET,
    DATE_OF_SCAN,
    BONE_SCAN_RESULT,
    ORTHO_DECISION,
    COMORBIDITIES,
    FOV,
    PROSTHESIS_LOCATION,
];

const OUTCOME_COLUMNS: &[&str] = &[NEGATIVE_SCAN_OUTCOME, POSITIVE_SCAN_OUTCOME];

const SUBJECTIVE_COLUMNS: &[&str] = &[
    REASON_FOR_INTERVENTION,
    REASON_FOR_NO_INTERVENTION,
    ADDITIONAL_INFORMATION,
];

/// Named column subsets of the cohort dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Demographics and clinical metadata; feeds the statistics.
    Objective,
    /// Free-text scan outcomes; feeds the distribution plots.
    Outcome,
    /// Free-text reasoning kept for manual review.
    Subjective,
}

impl Projection {
    pub const ALL: [Projection; 3] = [
        Projection::Objective,
        Projection::Outcome,
        Projection::Subjective,
    ];

    /// Ordered column names selected by this projection.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Projection::Objective => OBJECTIVE_COLUMNS,
            Projection::Outcome => OUTCOME_COLUMNS,
            Projection::Subjective => SUBJECTIVE_COLUMNS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Projection::Objective => "objective",
            Projection::Outcome => "outcome",
            Projection::Subjective => "subjective",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
