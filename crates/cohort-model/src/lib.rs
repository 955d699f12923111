//! Data model for the prosthetic joint infection cohort summary.
//!
//! - **columns**: source column names and the three named projections
//! - **dimension**: the six cohort dimensions and their category labels
//! - **summary**: fixed-shape summary records produced per dimension
//! - **options**: analysis run configuration

pub mod columns;
pub mod dimension;
pub mod options;
pub mod summary;

pub use columns::Projection;
pub use dimension::{BinaryLabels, Dimension, DimensionKind, UnknownDimension};
pub use options::AnalysisOptions;
pub use summary::{BinarySummary, DimensionSummary, NumericSummary};
