//! Fixed-shape text blocks, one per dimension summary.
//!
//! Means, standard deviations, percentages and ratios are rounded to two
//! decimals; medians, extremes and counts print unrounded in their shortest
//! form. Every block ends with a blank line.

use std::fmt;

use cohort_common::format_numeric;
use cohort_model::{BinaryLabels, BinarySummary, Dimension, DimensionSummary, NumericSummary};

/// `Display` adapter that renders a summary as its report block.
#[derive(Debug, Clone, Copy)]
pub struct ReportBlock<'a>(pub &'a DimensionSummary);

impl fmt::Display for ReportBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.0.dimension();
        match self.0 {
            DimensionSummary::Age(summary) | DimensionSummary::Bmi(summary) => {
                write_numeric(f, dimension, summary)
            }
            DimensionSummary::Gender(summary)
            | DimensionSummary::Comorbidities(summary)
            | DimensionSummary::Fov(summary)
            | DimensionSummary::ProstheticLocation(summary) => write_binary(f, dimension, summary),
        }
    }
}

fn write_numeric(
    f: &mut fmt::Formatter<'_>,
    dimension: Dimension,
    summary: &NumericSummary,
) -> fmt::Result {
    writeln!(f, "{dimension}:")?;
    writeln!(f, "Mean: {:.2}", summary.mean)?;
    writeln!(f, "Median: {}", format_numeric(summary.median))?;
    writeln!(f, "Standard Deviation: {:.2}", summary.std_dev)?;
    writeln!(f, "Maximum: {}", format_numeric(summary.max))?;
    writeln!(f, "Minimum: {}", format_numeric(summary.min))?;
    writeln!(f, "Number: {}", summary.count)?;
    writeln!(f)
}

fn write_binary(
    f: &mut fmt::Formatter<'_>,
    dimension: Dimension,
    summary: &BinarySummary,
) -> fmt::Result {
    let labels = summary.labels;
    writeln!(f, "{dimension}:")?;
    writeln!(f, "{}: {}", labels.a_name, summary.count_a)?;
    writeln!(f, "{} %: {:.2}", labels.a_name, summary.pct_a)?;
    writeln!(f, "{}: {}", labels.b_name, summary.count_b)?;
    writeln!(f, "{} %: {:.2}", labels.b_name, summary.pct_b)?;
    if summary.unrecognized > 0 {
        writeln!(f, "Unrecognised: {}", summary.unrecognized)?;
    }
    writeln!(f, "{}: 1:{:.2}", ratio_label(labels), summary.ratio)?;
    writeln!(f, "Number: {}", summary.total)?;
    writeln!(f)
}

/// `Ratio (M:F)` style label built from the raw cell values.
pub fn ratio_label(labels: BinaryLabels) -> String {
    format!("Ratio ({}:{})", labels.a, labels.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_label_uses_raw_values() {
        assert_eq!(ratio_label(BinaryLabels::FOV), "Ratio (T:WB)");
        assert_eq!(ratio_label(BinaryLabels::COMORBIDITIES), "Ratio (Yes:No)");
    }

    #[test]
    fn nan_statistics_print_as_nan() {
        let block = ReportBlock(&DimensionSummary::Bmi(NumericSummary::empty())).to_string();
        assert!(block.contains("Mean: NaN\n"));
        assert!(block.contains("Median: NaN\n"));
        assert!(block.ends_with("Number: 0\n\n"));
    }
}
