//! Cohort dimensions summarized by the report.
//!
//! Each dimension is bound to one source column and is either numeric
//! (Age, BMI) or binary-categorical with two recognized labels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::columns;

/// The two recognized labels of a binary dimension.
///
/// `a` and `b` are the raw cell values (matched case-sensitively); the
/// `*_name` fields are the human-readable names used in reports.
/// Ratios are always reported as `count_b / count_a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryLabels {
    pub a: &'static str,
    pub a_name: &'static str,
    pub b: &'static str,
    pub b_name: &'static str,
}

impl BinaryLabels {
    pub const GENDER: Self = Self {
        a: "M",
        a_name: "Male",
        b: "F",
        b_name: "Female",
    };
    pub const COMORBIDITIES: Self = Self {
        a: "Yes",
        a_name: "Yes",
        b: "No",
        b_name: "No",
    };
    pub const FOV: Self = Self {
        a: "T",
        a_name: "Targeted",
        b: "WB",
        b_name: "Whole Body",
    };
    pub const PROSTHETIC_LOCATION: Self = Self {
        a: "K",
        a_name: "Knee",
        b: "H",
        b_name: "Hip",
    };
}

/// Shape of the summary a dimension produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    Numeric,
    Binary(BinaryLabels),
}

/// A cohort dimension with a fixed summary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Age,
    Bmi,
    Gender,
    Comorbidities,
    Fov,
    ProstheticLocation,
}

/// Returned when a name does not match any dimension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dimension: {0}")]
pub struct UnknownDimension(pub String);

impl Dimension {
    /// All dimensions in report order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Age,
        Dimension::Bmi,
        Dimension::Gender,
        Dimension::Comorbidities,
        Dimension::Fov,
        Dimension::ProstheticLocation,
    ];

    /// Display name used as the report header.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Age => "Age",
            Dimension::Bmi => "BMI",
            Dimension::Gender => "Gender",
            Dimension::Comorbidities => "Comorbidities",
            Dimension::Fov => "FOV",
            Dimension::ProstheticLocation => "Prosthetic Location",
        }
    }

    /// Source column in the objective projection.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Age => columns::AGE,
            Dimension::Bmi => columns::BMI,
            Dimension::Gender => columns::GENDER,
            Dimension::Comorbidities => columns::COMORBIDITIES,
            Dimension::Fov => columns::FOV,
            Dimension::ProstheticLocation => columns::PROSTHESIS_LOCATION,
        }
    }

    pub fn kind(self) -> DimensionKind {
        match self {
            Dimension::Age | Dimension::Bmi => DimensionKind::Numeric,
            Dimension::Gender => DimensionKind::Binary(BinaryLabels::GENDER),
            Dimension::Comorbidities => DimensionKind::Binary(BinaryLabels::COMORBIDITIES),
            Dimension::Fov => DimensionKind::Binary(BinaryLabels::FOV),
            Dimension::ProstheticLocation => {
                DimensionKind::Binary(BinaryLabels::PROSTHETIC_LOCATION)
            }
        }
    }

    /// Looks up a dimension by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dimension| dimension.name() == name)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownDimension(s.to_string()))
    }
}
