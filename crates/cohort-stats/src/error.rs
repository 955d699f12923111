use cohort_model::Dimension;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while computing a dimension summary.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The dimension's source column is not in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// A percentage or ratio would divide by zero.
    #[error("cannot compute {quantity} for '{column}': denominator is zero")]
    DivisionByZero {
        column: String,
        quantity: &'static str,
    },

    /// A non-missing cell of a numeric column does not parse as a number.
    #[error("non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// Correlation needs at least two complete pairs.
    #[error("correlation of '{x}' and '{y}' needs at least 2 complete pairs, found {pairs}")]
    InsufficientPairs { x: String, y: String, pairs: usize },

    /// A two-label summary was requested for a numeric dimension.
    #[error("{dimension} is not a two-label dimension")]
    NotBinary { dimension: Dimension },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for StatsError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
