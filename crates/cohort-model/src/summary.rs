//! Summary records produced per cohort dimension.

use crate::dimension::{BinaryLabels, Dimension};

/// Descriptive statistics of a numeric dimension.
///
/// All five statistics are `NaN` when `count` is zero; `std_dev` is also
/// `NaN` for a single observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

impl NumericSummary {
    pub fn empty() -> Self {
        Self {
            mean: f64::NAN,
            median: f64::NAN,
            std_dev: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
            count: 0,
        }
    }
}

/// Counts and shares of a two-label categorical dimension.
///
/// Percentages use `total` (every non-missing value) as denominator. Values
/// matching neither label are counted in `unrecognized`, so
/// `pct_a + pct_b + pct_unrecognized() == 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarySummary {
    /// Labels the counts were taken against.
    pub labels: BinaryLabels,
    pub count_a: usize,
    pub pct_a: f64,
    pub count_b: usize,
    pub pct_b: f64,
    /// `count_b / count_a`.
    pub ratio: f64,
    pub unrecognized: usize,
    pub total: usize,
}

impl BinarySummary {
    pub fn pct_unrecognized(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        self.unrecognized as f64 / self.total as f64 * 100.0
    }
}

/// A summary tagged with the dimension it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionSummary {
    Age(NumericSummary),
    Bmi(NumericSummary),
    Gender(BinarySummary),
    Comorbidities(BinarySummary),
    Fov(BinarySummary),
    ProstheticLocation(BinarySummary),
}

impl DimensionSummary {
    pub fn dimension(&self) -> Dimension {
        match self {
            DimensionSummary::Age(_) => Dimension::Age,
            DimensionSummary::Bmi(_) => Dimension::Bmi,
            DimensionSummary::Gender(_) => Dimension::Gender,
            DimensionSummary::Comorbidities(_) => Dimension::Comorbidities,
            DimensionSummary::Fov(_) => Dimension::Fov,
            DimensionSummary::ProstheticLocation(_) => Dimension::ProstheticLocation,
        }
    }

    /// Number of non-missing observations behind the summary.
    pub fn count(&self) -> usize {
        match self {
            DimensionSummary::Age(s) | DimensionSummary::Bmi(s) => s.count,
            DimensionSummary::Gender(s)
            | DimensionSummary::Comorbidities(s)
            | DimensionSummary::Fov(s)
            | DimensionSummary::ProstheticLocation(s) => s.total,
        }
    }
}
