//! Configuration options for a cohort analysis run.

use std::path::PathBuf;

/// Default directory for rendered figures.
pub const DEFAULT_PLOT_DIR: &str = "plots";

/// Options controlling one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Cohort CSV to read.
    pub data_path: PathBuf,

    /// Directory that receives one SVG file per figure.
    pub output_dir: PathBuf,

    /// Render figures after the reports are printed.
    pub render_plots: bool,

    /// Report names to print, in order. Names are matched against the
    /// dimension display names; an unknown name prints a diagnostic line.
    /// Empty means every dimension.
    pub reports: Vec<String>,

    /// Print the first N rows of the normalized objective projection.
    pub preview_rows: Option<usize>,

    /// Print the overview table after the per-dimension blocks.
    pub show_table: bool,
}

impl AnalysisOptions {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            output_dir: PathBuf::from(DEFAULT_PLOT_DIR),
            render_plots: true,
            reports: Vec::new(),
            preview_rows: None,
            show_table: false,
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_plots(mut self, enable: bool) -> Self {
        self.render_plots = enable;
        self
    }

    #[must_use]
    pub fn with_reports(mut self, reports: Vec<String>) -> Self {
        self.reports = reports;
        self
    }

    #[must_use]
    pub fn with_preview(mut self, rows: Option<usize>) -> Self {
        self.preview_rows = rows;
        self
    }

    #[must_use]
    pub fn with_table(mut self, enable: bool) -> Self {
        self.show_table = enable;
        self
    }
}
