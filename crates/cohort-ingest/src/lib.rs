//! Cohort data ingestion.
//!
//! Reads the cohort spreadsheet export (a UTF-8 CSV with a single header row)
//! into a Polars DataFrame. Every column is read as text; numeric meaning is
//! assigned later, per dimension, after missing-value normalization.
//!
//! ```ignore
//! use std::path::Path;
//! use cohort_ingest::{read_cohort_csv, report_schema_gaps};
//!
//! let df = read_cohort_csv(Path::new("data/knee_and_hip.csv"))?;
//! let missing = report_schema_gaps(&df);
//! ```

mod error;
mod reader;
mod schema;

pub use error::{IngestError, Result};
pub use reader::{MAX_CSV_BYTES, read_cohort_csv, read_cohort_csv_with_limit};
pub use schema::report_schema_gaps;
