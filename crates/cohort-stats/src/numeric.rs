//! Descriptive statistics for numeric dimensions.
//!
//! Note: `median` sorts its input slice.

use cohort_model::NumericSummary;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;
use crate::values::numeric_values;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Sample standard deviation (denominator `n - 1`).
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Summarize a slice of observations.
pub fn summarize_values(values: &[f64]) -> NumericSummary {
    if values.is_empty() {
        return NumericSummary::empty();
    }
    let mut sorted = values.to_vec();
    let median = median(&mut sorted);
    NumericSummary {
        mean: mean(values),
        median,
        std_dev: sample_std_dev(values),
        max: sorted[sorted.len() - 1],
        min: sorted[0],
        count: values.len(),
    }
}

/// Summarize the non-missing values of a numeric column.
pub fn numeric_summary(df: &DataFrame, column: &str) -> Result<NumericSummary> {
    let values = numeric_values(df, column)?;
    let summary = summarize_values(&values);
    debug!(column = %column, count = summary.count, "numeric summary");
    Ok(summary)
}
