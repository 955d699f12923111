//! Cohort summary CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use cohort_cli::logging::{LogConfig, LogFormat, init_logging};
use cohort_cli::pipeline::run_analysis;
use tracing::info;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_logging(&log_config(cli))?;

    let analysis = run_analysis(&cli.analysis_options(), &mut io::stdout().lock())?;
    for figure in &analysis.figures {
        info!(path = %figure.display(), "figure written");
    }
    Ok(())
}

/// `--log-level` wins over `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config(cli: &Cli) -> LogConfig {
    let level = cli.log_level.map_or_else(
        || cli.verbosity.tracing_level_filter(),
        LogLevelArg::level_filter,
    );
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.use_env_filter = cli.log_level.is_none() && !cli.verbosity.is_present();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

impl LogLevelArg {
    fn level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}
