//! Subscriber setup for the cohort summary CLI.
//!
//! Library crates only emit `tracing` events; the binary decides where they go.
//!
//! | level | used for |
//! |---|---|
//! | `error` | failures that abort the run |
//! | `warn` | absent columns, values matching neither label |
//! | `info` | stage progress, figure paths |
//! | `debug` | per-column normalization and summary counts |
//! | `trace` | skipped columns; cell values only with `--log-data` |

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use cohort_common::set_log_data_enabled;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Crates whose events follow the configured level; everything else stays at `warn`.
const COHORT_CRATES: [&str; 8] = [
    "cohort_cli",
    "cohort_common",
    "cohort_ingest",
    "cohort_model",
    "cohort_plot",
    "cohort_report",
    "cohort_stats",
    "cohort_transform",
];

type FormatLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
    /// Allow patient-level cell values in log output.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::Pretty,
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }

    /// Directives applied when `RUST_LOG` is ignored or unset.
    pub fn directives(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        std::iter::once("warn".to_string())
            .chain(COHORT_CRATES.iter().map(|krate| format!("{krate}={level}")))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn env_filter(&self) -> EnvFilter {
        let from_env = self
            .use_env_filter
            .then(|| EnvFilter::try_from_default_env().ok())
            .flatten();
        from_env.unwrap_or_else(|| EnvFilter::new(self.directives()))
    }

    fn format_layer(&self, writer: BoxMakeWriter) -> FormatLayer {
        let base = fmt::layer()
            .with_writer(writer)
            .with_target(self.with_target);
        match (self.format, self.with_timestamps) {
            (LogFormat::Json, _) => base.json().boxed(),
            (LogFormat::Compact, true) => base.compact().with_ansi(self.with_ansi).boxed(),
            (LogFormat::Compact, false) => base
                .compact()
                .with_ansi(self.with_ansi)
                .without_time()
                .boxed(),
            (LogFormat::Pretty, true) => base.with_ansi(self.with_ansi).boxed(),
            (LogFormat::Pretty, false) => base.with_ansi(self.with_ansi).without_time().boxed(),
        }
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };

    set_log_data_enabled(config.log_data);
    tracing_subscriber::registry()
        .with(config.format_layer(writer).with_filter(config.env_filter()))
        .try_init()
        .context("install tracing subscriber")
}
