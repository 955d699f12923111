//! Shared utilities for the cohort summary crates.
//!
//! This crate provides the Polars value helpers used across the workspace
//! (cell-to-string and cell-to-number conversion, plus the blank-cell pattern
//! that drives missing-value normalization) and the log redaction switch.

pub mod polars;
pub mod redact;

pub use polars::{any_to_f64, any_to_string, format_numeric, is_blank_cell, parse_f64};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
