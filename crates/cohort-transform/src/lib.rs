//! Cohort data transformation.
//!
//! - **missing**: rewrites blank markers to null, per selected column
//! - **projection**: selects the objective, outcome and subjective column sets

pub mod error;
pub mod missing;
pub mod projection;

pub use error::{Result, TransformError};
pub use missing::{NormalizationReport, normalize_missing};
pub use projection::{ProjectedCohort, project, project_all};
