//! End-to-end runs of the analysis pipeline on small CSV exports.

use std::io::Write;
use std::path::Path;

use cohort_cli::pipeline::{
    AGE_BMI_FIGURE, AnalysisRun, BMI_GENDER_FIGURE, SCAN_OUTCOMES_FIGURE, run_analysis,
};
use cohort_model::{AnalysisOptions, Dimension};
use tempfile::{NamedTempFile, TempDir};

const HEADER: &str = "id,Initials,Age,Gender,BMI,Date of prosthesis insertion,\
Date of symptom onset,Date of scan,Result of bone scan,Ortho Decision,Comorbidities,FOV,\
Prosthesis Location,Negative Scan Outcome,Positive Scan Outcome,Reason for intervention,\
Reason for no intervention,Additional information";

const ROWS: [&str; 4] = [
    "1,AB,40,M,25,2015,2019,2020,Positive,Revision,Yes,T,K,,Loosening,Pain,,",
    "2,CD,,F,\\,2012,2018,2020,Negative,Conservative,No,WB,H,No infection,,,Low risk,",
    "3,EF,\\,\\,27.5,2010,2017,2021,Negative,Conservative,No,WB,K,No infection,\\,,\\,see notes",
    "4,GH,60,M,30,2016,2020,2021,Positive,Revision,Yes,WB,\\,,Infection,Pain,,",
];

fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn run_to_string(options: &AnalysisOptions) -> (anyhow::Result<AnalysisRun>, String) {
    let mut out = Vec::new();
    let result = run_analysis(options, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn reports_only(path: &Path) -> AnalysisOptions {
    AnalysisOptions::new(path).with_plots(false)
}

#[test]
fn prints_all_six_reports() {
    let csv = write_csv(HEADER, &ROWS);

    let (result, output) = run_to_string(&reports_only(csv.path()));

    let run = result.unwrap();
    assert_eq!(run.summaries.len(), 6);
    assert!(run.missing_columns.is_empty());
    assert!(run.figures.is_empty());
    insta::assert_snapshot!(output, @r"
    Age:
    Mean: 50.00
    Median: 50
    Standard Deviation: 14.14
    Maximum: 60
    Minimum: 40
    Number: 2

    BMI:
    Mean: 27.50
    Median: 27.5
    Standard Deviation: 2.50
    Maximum: 30
    Minimum: 25
    Number: 3

    Gender:
    Male: 2
    Male %: 66.67
    Female: 1
    Female %: 33.33
    Ratio (M:F): 1:0.50
    Number: 3

    Comorbidities:
    Yes: 2
    Yes %: 50.00
    No: 2
    No %: 50.00
    Ratio (Yes:No): 1:1.00
    Number: 4

    FOV:
    Targeted: 1
    Targeted %: 25.00
    Whole Body: 3
    Whole Body %: 75.00
    Ratio (T:WB): 1:3.00
    Number: 4

    Prosthetic Location:
    Knee: 2
    Knee %: 66.67
    Hip: 1
    Hip %: 33.33
    Ratio (K:H): 1:0.50
    Number: 3
    ");
}

#[test]
fn unknown_report_name_prints_one_line() {
    let csv = write_csv(HEADER, &ROWS);
    let options = reports_only(csv.path()).with_reports(vec!["Height".to_string()]);

    let (result, output) = run_to_string(&options);

    assert!(result.is_ok());
    assert_eq!(output, "Category not recognised: Height\n");
}

#[test]
fn selected_reports_print_in_requested_order() {
    let csv = write_csv(HEADER, &ROWS);
    let options = reports_only(csv.path()).with_reports(vec![
        Dimension::Fov.name().to_string(),
        Dimension::Age.name().to_string(),
    ]);

    let (result, output) = run_to_string(&options);

    assert!(result.is_ok());
    assert!(output.starts_with("FOV:\n"));
    assert!(output.contains("\nAge:\n"));
    assert!(!output.contains("Gender:"));
}

#[test]
fn preview_and_table_are_printed() {
    let csv = write_csv(HEADER, &ROWS);
    let options = reports_only(csv.path())
        .with_reports(vec!["Age".to_string()])
        .with_preview(Some(2))
        .with_table(true);

    let (result, output) = run_to_string(&options);

    assert!(result.is_ok());
    assert!(output.contains("shape: (2, 13)"));
    assert!(output.contains("Age:\nMean: 50.00\n"));
    assert!(output.contains("Prosthetic Location"));
}

#[test]
fn renders_three_figures() {
    let csv = write_csv(HEADER, &ROWS);
    let plots = TempDir::new().unwrap();
    let output_dir = plots.path().join("figures");
    let options = AnalysisOptions::new(csv.path()).with_output_dir(&output_dir);

    let (result, _) = run_to_string(&options);

    let run = result.unwrap();
    let expected: Vec<_> = [SCAN_OUTCOMES_FIGURE, AGE_BMI_FIGURE, BMI_GENDER_FIGURE]
        .iter()
        .map(|stem| output_dir.join(format!("{stem}.svg")))
        .collect();
    assert_eq!(run.figures, expected);
    for path in &run.figures {
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"));
    }
    assert!(run.plot_warnings.is_empty());
}

#[test]
fn missing_outcome_column_is_a_plot_warning() {
    let header = HEADER.replace(",Positive Scan Outcome", ",Scan Outcome Notes");
    let csv = write_csv(&header, &ROWS);
    let plots = TempDir::new().unwrap();
    let options = AnalysisOptions::new(csv.path()).with_output_dir(plots.path());

    let (result, _) = run_to_string(&options);

    let run = result.unwrap();
    assert_eq!(run.missing_columns, vec!["Positive Scan Outcome".to_string()]);
    assert_eq!(run.plot_warnings.len(), 1);
    assert!(run.plot_warnings[0].contains("Positive Scan Outcome"));
    assert_eq!(run.figures.len(), 3);
}

fn without_males() -> NamedTempFile {
    let rows = ROWS.map(|row| row.replace(",M,", ",F,"));
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    write_csv(HEADER, &rows)
}

#[test]
fn cohort_without_males_fails_on_the_gender_ratio() {
    let csv = without_males();

    let (result, output) = run_to_string(&reports_only(csv.path()));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("summarize Gender"));
    assert!(message.contains("ratio"));
    assert!(output.starts_with("Age:\nMean: 50.00\n"));
    assert!(output.contains("\nBMI:\nMean: 27.50\n"));
    assert!(output.ends_with("Number: 3\n\n"));
    assert!(!output.contains("Gender:"));
}

#[test]
fn unselected_failing_dimension_is_not_computed() {
    let csv = without_males();
    let options = reports_only(csv.path()).with_reports(vec!["Age".to_string()]);

    let (result, output) = run_to_string(&options);

    let run = result.unwrap();
    assert_eq!(run.summaries.len(), 1);
    assert_eq!(run.summaries[0].dimension(), Dimension::Age);
    assert!(output.starts_with("Age:\n"));
    assert!(!output.contains("Gender"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let options = reports_only(&dir.path().join("absent.csv"));

    let (result, output) = run_to_string(&options);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("read cohort data"));
    assert!(output.is_empty());
}
