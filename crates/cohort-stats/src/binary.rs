//! Two-label categorical summaries.

use cohort_common::redact_value;
use cohort_model::{BinaryLabels, BinarySummary, Dimension, DimensionKind};
use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::error::{Result, StatsError};
use crate::values::text_values;

/// Count the two labels of a binary dimension's column.
///
/// Values are compared exactly, case and surrounding whitespace included, so
/// `" M"` is not `"M"`. Anything else lands in the `unrecognized` bucket and
/// is logged once per column.
pub fn binary_summary(df: &DataFrame, dimension: Dimension) -> Result<BinarySummary> {
    let DimensionKind::Binary(labels) = dimension.kind() else {
        return Err(StatsError::NotBinary { dimension });
    };
    let column = dimension.column();
    let values = text_values(df, column)?;
    summarize_labels(column, &values, labels)
}

pub(crate) fn summarize_labels(
    column: &str,
    values: &[String],
    labels: BinaryLabels,
) -> Result<BinarySummary> {
    let mut count_a = 0usize;
    let mut count_b = 0usize;
    let mut unrecognized = Vec::new();

    for value in values {
        let value = value.as_str();
        if value == labels.a {
            count_a += 1;
        } else if value == labels.b {
            count_b += 1;
        } else {
            unrecognized.push(value);
        }
    }

    let total = values.len();
    if total == 0 {
        return Err(StatsError::DivisionByZero {
            column: column.to_string(),
            quantity: "percentage",
        });
    }
    if count_a == 0 {
        return Err(StatsError::DivisionByZero {
            column: column.to_string(),
            quantity: "ratio",
        });
    }

    if let Some(first) = unrecognized.first() {
        warn!(
            column = %column,
            count = unrecognized.len(),
            example = %redact_value(first),
            "values match neither label"
        );
    }

    let summary = BinarySummary {
        labels,
        count_a,
        pct_a: count_a as f64 / total as f64 * 100.0,
        count_b,
        pct_b: count_b as f64 / total as f64 * 100.0,
        ratio: count_b as f64 / count_a as f64,
        unrecognized: unrecognized.len(),
        total,
    };
    debug!(column = %column, total, count_a, count_b, "binary summary");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENDER: BinaryLabels = BinaryLabels::GENDER;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn counts_and_shares() {
        let summary = summarize_labels("Gender", &strings(&["M", "F", "M"]), GENDER).unwrap();
        assert_eq!(summary.count_a, 2);
        assert_eq!(summary.count_b, 1);
        assert_eq!(summary.total, 3);
        assert!((summary.pct_a - 66.666_666).abs() < 1e-4);
        assert!((summary.pct_b - 33.333_333).abs() < 1e-4);
        assert_eq!(summary.ratio, 0.5);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let summary = summarize_labels("Gender", &strings(&["M", "m", "F", "f"]), GENDER).unwrap();
        assert_eq!(summary.count_a, 1);
        assert_eq!(summary.count_b, 1);
        assert_eq!(summary.unrecognized, 2);
        assert_eq!(summary.pct_a + summary.pct_b + summary.pct_unrecognized(), 100.0);
    }

    #[test]
    fn padded_labels_are_unrecognized() {
        let summary =
            summarize_labels("Gender", &strings(&["M", " M", "F ", "F"]), GENDER).unwrap();
        assert_eq!(summary.count_a, 1);
        assert_eq!(summary.count_b, 1);
        assert_eq!(summary.unrecognized, 2);
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn numeric_dimension_has_no_labels() {
        let err = binary_summary(&DataFrame::empty(), Dimension::Age).unwrap_err();
        assert!(matches!(
            err,
            StatsError::NotBinary {
                dimension: Dimension::Age
            }
        ));
    }

    #[test]
    fn summary_keeps_its_labels() {
        let summary = summarize_labels("FOV", &strings(&["T", "WB"]), BinaryLabels::FOV).unwrap();
        assert_eq!(summary.labels, BinaryLabels::FOV);
    }

    #[test]
    fn empty_column_cannot_form_percentages() {
        let err = summarize_labels("Gender", &[], GENDER).unwrap_err();
        assert!(matches!(
            err,
            StatsError::DivisionByZero {
                quantity: "percentage",
                ..
            }
        ));
    }

    #[test]
    fn missing_first_label_cannot_form_ratio() {
        let err = summarize_labels("Gender", &strings(&["F", "F"]), GENDER).unwrap_err();
        assert!(matches!(
            err,
            StatsError::DivisionByZero {
                quantity: "ratio",
                ..
            }
        ));
    }

    #[test]
    fn missing_second_label_gives_zero_ratio() {
        let summary = summarize_labels("Gender", &strings(&["M"]), GENDER).unwrap();
        assert_eq!(summary.ratio, 0.0);
        assert_eq!(summary.pct_a, 100.0);
    }
}
