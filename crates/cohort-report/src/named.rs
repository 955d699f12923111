//! Report selection by dimension name.
//!
//! This is the one place an external string picks a dimension, so an
//! unrecognized name is a normal outcome: it is reported on the output stream
//! and does not fail the run.

use std::io::{self, Write};

use cohort_model::{Dimension, DimensionSummary};
use tracing::debug;

use crate::block::ReportBlock;

/// Write the report block of one summary.
pub fn write_report<W: Write>(out: &mut W, summary: &DimensionSummary) -> io::Result<()> {
    write!(out, "{}", ReportBlock(summary))
}

/// Write the block for the dimension called `name`.
///
/// `name` must be one of the six display names, matched exactly. Any other
/// name produces the single line `Category not recognised: <name>`. A known
/// name without a computed summary writes nothing.
pub fn write_named_report<W: Write>(
    out: &mut W,
    name: &str,
    summaries: &[DimensionSummary],
) -> io::Result<()> {
    let Ok(dimension) = name.parse::<Dimension>() else {
        return writeln!(out, "Category not recognised: {name}");
    };
    match summaries
        .iter()
        .find(|summary| summary.dimension() == dimension)
    {
        Some(summary) => write_report(out, summary),
        None => {
            debug!(dimension = %dimension, "no summary computed for requested report");
            Ok(())
        }
    }
}
