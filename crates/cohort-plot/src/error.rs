use std::path::PathBuf;

use cohort_stats::StatsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Values behind a panel could not be extracted.
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("failed to draw {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, PlotError>;
