//! Named projections of the cohort dataset.
//!
//! A projection selects a fixed column list, keeps row order and row count,
//! and normalizes missing values in the selected columns.

use cohort_model::Projection;
use polars::prelude::DataFrame;
use tracing::{info, warn};

use crate::error::Result;
use crate::missing::normalize_missing;

/// The three projections of one dataset, each already normalized.
#[derive(Debug, Clone)]
pub struct ProjectedCohort {
    pub objective: DataFrame,
    pub outcome: DataFrame,
    pub subjective: DataFrame,
}

/// Select the projection's columns and normalize them.
///
/// Columns missing from `df` are logged and left out; consumers that depend
/// on one of them report the gap themselves.
pub fn project(df: &DataFrame, projection: Projection) -> Result<DataFrame> {
    let mut present = Vec::with_capacity(projection.columns().len());
    for &column in projection.columns() {
        if df.column(column).is_ok() {
            present.push(column);
        } else {
            warn!(projection = %projection, column = %column, "column missing from dataset");
        }
    }

    let mut projected = df.select(present)?;
    let report = normalize_missing(&mut projected, projection.columns())?;
    info!(
        projection = %projection,
        rows = projected.height(),
        columns = projected.width(),
        missing_rewritten = report.total(),
        "projection ready"
    );
    Ok(projected)
}

/// Build all three projections.
pub fn project_all(df: &DataFrame) -> Result<ProjectedCohort> {
    Ok(ProjectedCohort {
        objective: project(df, Projection::Objective)?,
        outcome: project(df, Projection::Outcome)?,
        subjective: project(df, Projection::Subjective)?,
    })
}
