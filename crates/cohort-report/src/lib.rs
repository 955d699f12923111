//! Console reporting for cohort summaries.

pub mod block;
pub mod named;
pub mod table;

pub use block::{ReportBlock, ratio_label};
pub use named::{write_named_report, write_report};
pub use table::summary_table;
