//! Per-dimension statistics over the normalized objective projection.
//!
//! Numeric dimensions (Age, BMI) produce a [`NumericSummary`]; binary
//! dimensions produce a [`BinarySummary`]. [`summarize`] dispatches on
//! [`Dimension`] and tags the result.

pub mod binary;
pub mod correlation;
pub mod error;
pub mod numeric;
pub mod values;

use cohort_model::{BinarySummary, Dimension, DimensionSummary, NumericSummary};
use polars::prelude::DataFrame;

pub use binary::binary_summary;
pub use correlation::{Correlation, pearson, pearson_r};
pub use error::{Result, StatsError};
pub use numeric::{mean, median, numeric_summary, sample_std_dev, summarize_values};
pub use values::{
    numeric_values, optional_numeric_values, optional_text_values, paired_values, text_values,
};

pub fn age_stats(df: &DataFrame) -> Result<NumericSummary> {
    numeric_summary(df, Dimension::Age.column())
}

pub fn bmi_stats(df: &DataFrame) -> Result<NumericSummary> {
    numeric_summary(df, Dimension::Bmi.column())
}

/// Male (`M`) versus female (`F`).
pub fn gender_stats(df: &DataFrame) -> Result<BinarySummary> {
    binary_summary(df, Dimension::Gender)
}

pub fn comorbidity_stats(df: &DataFrame) -> Result<BinarySummary> {
    binary_summary(df, Dimension::Comorbidities)
}

/// Targeted (`T`) versus whole-body (`WB`) field of view.
pub fn scan_stats(df: &DataFrame) -> Result<BinarySummary> {
    binary_summary(df, Dimension::Fov)
}

/// Knee (`K`) versus hip (`H`).
pub fn prosthetic_stats(df: &DataFrame) -> Result<BinarySummary> {
    binary_summary(df, Dimension::ProstheticLocation)
}

/// Compute the summary of one dimension.
pub fn summarize(df: &DataFrame, dimension: Dimension) -> Result<DimensionSummary> {
    Ok(match dimension {
        Dimension::Age => DimensionSummary::Age(age_stats(df)?),
        Dimension::Bmi => DimensionSummary::Bmi(bmi_stats(df)?),
        Dimension::Gender => DimensionSummary::Gender(gender_stats(df)?),
        Dimension::Comorbidities => DimensionSummary::Comorbidities(comorbidity_stats(df)?),
        Dimension::Fov => DimensionSummary::Fov(scan_stats(df)?),
        Dimension::ProstheticLocation => {
            DimensionSummary::ProstheticLocation(prosthetic_stats(df)?)
        }
    })
}

/// Summaries of every dimension in report order, stopping at the first error.
pub fn summarize_all(df: &DataFrame) -> Result<Vec<DimensionSummary>> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| summarize(df, dimension))
        .collect()
}
