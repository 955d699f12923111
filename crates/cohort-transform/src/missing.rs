//! Missing-value normalization.
//!
//! The cohort export marks absent values three ways: an empty field, a
//! whitespace-only field, or a lone backslash. [`normalize_missing`] folds the
//! latter two into null (empty fields already arrive as null), one column at a
//! time. The operation is idempotent and never touches unlisted columns.

use std::collections::BTreeMap;

use cohort_common::is_blank_cell;
use polars::prelude::{DataFrame, DataType, IntoColumn, StringChunked};
use tracing::{debug, trace};

use crate::error::Result;

/// Number of cells rewritten to null, per column.
///
/// Columns with nothing to rewrite are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub rewritten: BTreeMap<String, usize>,
}

impl NormalizationReport {
    pub fn total(&self) -> usize {
        self.rewritten.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rewritten.is_empty()
    }
}

/// Replace blank markers with null in the named columns.
///
/// Absent columns are skipped. Non-text columns cannot hold a blank marker
/// and pass through with their type intact.
pub fn normalize_missing(df: &mut DataFrame, columns: &[&str]) -> Result<NormalizationReport> {
    let mut report = NormalizationReport::default();

    for &name in columns {
        let Ok(column) = df.column(name) else {
            trace!(column = %name, "column not present, skipping normalization");
            continue;
        };
        if column.dtype() != &DataType::String {
            continue;
        }

        let values = column.str()?;
        let blanks = values
            .into_iter()
            .filter(|value| value.is_some_and(is_blank_cell))
            .count();
        if blanks == 0 {
            continue;
        }

        let normalized: StringChunked = values
            .into_iter()
            .map(|value| value.filter(|cell| !is_blank_cell(cell)))
            .collect();
        let normalized = normalized.with_name(name.into());
        df.with_column(normalized.into_column())?;

        debug!(column = %name, rewritten = blanks, "normalized blank cells to missing");
        report.rewritten.insert(name.to_string(), blanks);
    }

    Ok(report)
}
