//! Library side of the cohort summary CLI.

pub mod logging;
pub mod pipeline;
