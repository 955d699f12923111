//! Age/BMI relationship plots over the objective projection.

use std::collections::BTreeMap;

use cohort_model::columns::{AGE, BMI, GENDER};
use cohort_stats::{
    StatsError, optional_numeric_values, optional_text_values, paired_values, pearson,
};
use polars::prelude::DataFrame;
use tracing::{info, warn};

use crate::error::Result;
use crate::figure::{BoxGroup, Figure, Panel, PanelKind};

/// Scatter of BMI against Age, annotated with Pearson's r.
///
/// Only rows with both values present are plotted and correlated.
pub fn age_bmi_scatter(df: &DataFrame) -> Result<Figure> {
    let title = "Variance of BMI with Age";
    let mut warnings = Vec::new();
    let (points, annotation) = match pearson(df, AGE, BMI) {
        Ok(correlation) => {
            info!(pairs = correlation.points.len(), r = correlation.r, "age/BMI correlation");
            let annotation = format!("Correlation Coefficient = {:.2}", correlation.r);
            (correlation.points, Some(annotation))
        }
        Err(err @ StatsError::InsufficientPairs { .. }) => {
            warn!(error = %err, "correlation not annotated");
            warnings.push(err.to_string());
            (paired_values(df, AGE, BMI)?, None)
        }
        Err(err) => return Err(err.into()),
    };

    let mut figure = Figure::single(
        title,
        Panel {
            cell: 0,
            title: title.to_string(),
            x_label: AGE.to_string(),
            y_label: BMI.to_string(),
            kind: PanelKind::Scatter { points, annotation },
        },
    );
    figure.warnings = warnings;
    Ok(figure)
}

/// BMI spread per gender, one box per observed gender in sorted order.
pub fn bmi_by_gender(df: &DataFrame) -> Result<Figure> {
    let title = "Comparison of BMI spread with Gender";
    let genders = optional_text_values(df, GENDER)?;
    let bmi = optional_numeric_values(df, BMI)?;

    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (gender, value) in genders.into_iter().zip(bmi) {
        if let (Some(gender), Some(value)) = (gender, value) {
            grouped.entry(gender).or_default().push(value);
        }
    }
    let groups: Vec<BoxGroup> = grouped
        .into_iter()
        .map(|(label, values)| BoxGroup { label, values })
        .collect();

    Ok(Figure::single(
        title,
        Panel {
            cell: 0,
            title: title.to_string(),
            x_label: GENDER.to_string(),
            y_label: BMI.to_string(),
            kind: PanelKind::BoxPlot { groups },
        },
    ))
}
