//! CLI argument definitions for the cohort summary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cohort_model::AnalysisOptions;
use cohort_model::options::DEFAULT_PLOT_DIR;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cohort-summary",
    version,
    about = "Summarize a knee and hip prosthesis cohort export",
    long_about = "Summarize a knee and hip prosthesis cohort export.\n\n\
                  Prints Age, BMI, Gender, Comorbidities, FOV and Prosthetic Location\n\
                  summaries and renders scan outcome and demographic plots as SVG."
)]
pub struct Cli {
    /// Cohort CSV export with a single header row.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// Directory for rendered SVG figures.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_PLOT_DIR)]
    pub output_dir: PathBuf,

    /// Print reports only; skip rendering figures.
    #[arg(long = "no-plots")]
    pub no_plots: bool,

    /// Print only the named report (repeatable), e.g. --report Age --report FOV.
    #[arg(long = "report", value_name = "NAME")]
    pub reports: Vec<String>,

    /// Print the first N rows of the normalized objective data.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// Print an overview table after the reports.
    #[arg(long = "table")]
    pub table: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to colorize log output.
    #[command(flatten)]
    pub color: Color,

    /// Log level; takes precedence over -v/-q and RUST_LOG.
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log line format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include patient-level cell values in log output.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions::new(&self.data)
            .with_output_dir(&self.output_dir)
            .with_plots(!self.no_plots)
            .with_reports(self.reports.clone())
            .with_preview(self.preview)
            .with_table(self.table)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
