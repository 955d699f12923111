//! Pearson correlation over complete cases.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::numeric::mean;
use crate::values::paired_values;

/// Correlation between two numeric columns and the pairs it was computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    /// Pearson coefficient; `NaN` when either column has zero variance.
    pub r: f64,
    pub points: Vec<(f64, f64)>,
}

/// Pearson coefficient of `(x, y)` pairs.
///
/// Returns `NaN` for fewer than two pairs or a constant coordinate.
pub fn pearson_r(points: &[(f64, f64)]) -> f64 {
    if points.len() < 2 {
        return f64::NAN;
    }
    let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
    let ys: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    let mean_x = mean(&xs);
    let mean_y = mean(&ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Correlate two numeric columns, using only rows where both are present.
pub fn pearson(df: &DataFrame, x: &str, y: &str) -> Result<Correlation> {
    let points = paired_values(df, x, y)?;
    if points.len() < 2 {
        return Err(StatsError::InsufficientPairs {
            x: x.to_string(),
            y: y.to_string(),
            pairs: points.len(),
        });
    }
    let r = pearson_r(&points);
    debug!(x = %x, y = %y, pairs = points.len(), r, "pearson correlation");
    Ok(Correlation { r, points })
}
