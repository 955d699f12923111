//! Cohort analysis pipeline.
//!
//! Stages run in order and the first failure aborts the rest:
//! 1. **Ingest**: read and validate the CSV export
//! 2. **Project**: split into objective, outcome and subjective projections,
//!    normalizing missing values
//! 3. **Report**: summarize and print each selected dimension in turn; blocks
//!    written before a failing dimension stay written
//! 4. **Overview**: optional table over all six dimensions
//! 5. **Plot**: render the outcome distributions and the Age/BMI figures

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cohort_ingest::{read_cohort_csv, report_schema_gaps};
use cohort_model::{AnalysisOptions, Dimension, DimensionSummary, Projection};
use cohort_plot::{Figure, age_bmi_scatter, bmi_by_gender, distribution_figure, render_svg};
use cohort_report::{summary_table, write_named_report};
use cohort_stats::{summarize, summarize_all};
use cohort_transform::{ProjectedCohort, project_all};
use tracing::{info, info_span};

/// File stems of the rendered figures, in render order.
pub const SCAN_OUTCOMES_FIGURE: &str = "scan_outcomes";
pub const AGE_BMI_FIGURE: &str = "age_bmi_scatter";
pub const BMI_GENDER_FIGURE: &str = "bmi_by_gender";

/// What a completed run produced.
#[derive(Debug)]
pub struct AnalysisRun {
    /// Summaries of the reported dimensions, in report order.
    pub summaries: Vec<DimensionSummary>,
    /// Expected columns absent from the export.
    pub missing_columns: Vec<String>,
    /// Written SVG files.
    pub figures: Vec<PathBuf>,
    /// Warnings collected while building figures.
    pub plot_warnings: Vec<String>,
}

/// Run every stage, writing reports to `out`.
pub fn run_analysis<W: Write>(options: &AnalysisOptions, out: &mut W) -> Result<AnalysisRun> {
    let span = info_span!("analysis", path = %options.data_path.display());
    let _guard = span.enter();

    let df = read_cohort_csv(&options.data_path)
        .with_context(|| format!("read cohort data {}", options.data_path.display()))?;
    let missing_columns = report_schema_gaps(&df);
    info!(
        rows = df.height(),
        columns = df.width(),
        missing = missing_columns.len(),
        "cohort data loaded"
    );

    let cohort = project_all(&df).context("project cohort data")?;
    if let Some(rows) = options.preview_rows {
        writeln!(out, "{}", cohort.objective.head(Some(rows)))?;
    }

    let summaries = write_selected_reports(out, options, &cohort)?;
    if options.show_table {
        let overview = summarize_all(&cohort.objective).context("summarize cohort dimensions")?;
        writeln!(out, "{}", summary_table(&overview))?;
    }
    out.flush()?;

    let mut run = AnalysisRun {
        summaries,
        missing_columns,
        figures: Vec::new(),
        plot_warnings: Vec::new(),
    };
    if options.render_plots {
        render_figures(options, &cohort, &mut run)?;
    }
    Ok(run)
}

/// Summarize and print each selected report, stopping at the first dimension
/// that cannot be summarized. Only selected dimensions are computed.
fn write_selected_reports<W: Write>(
    out: &mut W,
    options: &AnalysisOptions,
    cohort: &ProjectedCohort,
) -> Result<Vec<DimensionSummary>> {
    let names: Vec<&str> = if options.reports.is_empty() {
        Dimension::ALL.map(Dimension::name).to_vec()
    } else {
        options.reports.iter().map(String::as_str).collect()
    };

    let mut summaries: Vec<DimensionSummary> = Vec::new();
    for name in names {
        if let Some(dimension) = Dimension::from_name(name)
            && !summaries.iter().any(|summary| summary.dimension() == dimension)
        {
            match summarize(&cohort.objective, dimension) {
                Ok(summary) => summaries.push(summary),
                Err(error) => {
                    out.flush()?;
                    return Err(error).with_context(|| format!("summarize {dimension}"));
                }
            }
        }
        write_named_report(out, name, &summaries)?;
    }
    Ok(summaries)
}

fn render_figures(
    options: &AnalysisOptions,
    cohort: &ProjectedCohort,
    run: &mut AnalysisRun,
) -> Result<()> {
    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("create output directory {}", options.output_dir.display())
    })?;

    let figures = [
        (
            SCAN_OUTCOMES_FIGURE,
            distribution_figure(&cohort.outcome, Projection::Outcome.columns())?,
        ),
        (AGE_BMI_FIGURE, age_bmi_scatter(&cohort.objective)?),
        (BMI_GENDER_FIGURE, bmi_by_gender(&cohort.objective)?),
    ];
    for (stem, figure) in figures {
        let path = write_figure(options, stem, &figure)?;
        run.plot_warnings.extend(figure.warnings);
        run.figures.push(path);
    }
    Ok(())
}

fn write_figure(options: &AnalysisOptions, stem: &str, figure: &Figure) -> Result<PathBuf> {
    let path = options.output_dir.join(format!("{stem}.svg"));
    render_svg(figure, &path).with_context(|| format!("render {}", figure.title))?;
    Ok(path)
}
