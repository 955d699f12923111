//! Report block rendering and name-selected reports.

use cohort_model::{BinaryLabels, BinarySummary, DimensionSummary, NumericSummary};
use cohort_report::{ReportBlock, write_named_report, write_report};

fn age() -> DimensionSummary {
    DimensionSummary::Age(NumericSummary {
        mean: 50.0,
        median: 50.0,
        std_dev: 14.142_135_623_730_951,
        max: 60.0,
        min: 40.0,
        count: 2,
    })
}

fn gender() -> DimensionSummary {
    DimensionSummary::Gender(BinarySummary {
        labels: BinaryLabels::GENDER,
        count_a: 2,
        pct_a: 200.0 / 3.0,
        count_b: 1,
        pct_b: 100.0 / 3.0,
        ratio: 0.5,
        unrecognized: 0,
        total: 3,
    })
}

fn render(names: &[&str], summaries: &[DimensionSummary]) -> String {
    let mut out = Vec::new();
    for name in names {
        write_named_report(&mut out, name, summaries).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn numeric_block() {
    let block = ReportBlock(&age()).to_string();

    insta::assert_snapshot!(block, @r"
    Age:
    Mean: 50.00
    Median: 50
    Standard Deviation: 14.14
    Maximum: 60
    Minimum: 40
    Number: 2
    ");
    assert!(block.ends_with("Number: 2\n\n"));
}

#[test]
fn fractional_values_keep_significant_digits() {
    let bmi = DimensionSummary::Bmi(NumericSummary {
        mean: 28.333_333,
        median: 27.5,
        std_dev: 2.25,
        max: 31.25,
        min: 26.25,
        count: 3,
    });

    insta::assert_snapshot!(ReportBlock(&bmi).to_string(), @r"
    BMI:
    Mean: 28.33
    Median: 27.5
    Standard Deviation: 2.25
    Maximum: 31.25
    Minimum: 26.25
    Number: 3
    ");
}

#[test]
fn binary_block() {
    insta::assert_snapshot!(ReportBlock(&gender()).to_string(), @r"
    Gender:
    Male: 2
    Male %: 66.67
    Female: 1
    Female %: 33.33
    Ratio (M:F): 1:0.50
    Number: 3
    ");
}

#[test]
fn binary_block_lists_unrecognised_values() {
    let location = DimensionSummary::ProstheticLocation(BinarySummary {
        labels: BinaryLabels::PROSTHETIC_LOCATION,
        count_a: 2,
        pct_a: 50.0,
        count_b: 1,
        pct_b: 25.0,
        ratio: 0.5,
        unrecognized: 1,
        total: 4,
    });

    insta::assert_snapshot!(ReportBlock(&location).to_string(), @r"
    Prosthetic Location:
    Knee: 2
    Knee %: 50.00
    Hip: 1
    Hip %: 25.00
    Unrecognised: 1
    Ratio (K:H): 1:0.50
    Number: 4
    ");
}

#[test]
fn unknown_name_writes_one_diagnostic_line() {
    let output = render(&["Height"], &[age(), gender()]);

    assert_eq!(output, "Category not recognised: Height\n");
}

#[test]
fn names_match_exactly() {
    let output = render(&["gender"], &[gender()]);

    assert_eq!(output, "Category not recognised: gender\n");
}

#[test]
fn named_report_selects_matching_block() {
    let output = render(&["Gender"], &[age(), gender()]);

    assert!(output.starts_with("Gender:\n"));
    assert!(!output.contains("Age:"));
}

#[test]
fn single_report_matches_display_block() {
    let mut out = Vec::new();
    write_report(&mut out, &gender()).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), ReportBlock(&gender()).to_string());
}

#[test]
fn known_name_without_summary_writes_nothing() {
    let output = render(&["FOV"], &[age()]);

    assert!(output.is_empty());
}

#[test]
fn blocks_follow_requested_order() {
    let output = render(&["Age", "Gender"], &[gender(), age()]);

    let age_at = output.find("Age:").unwrap();
    let gender_at = output.find("Gender:").unwrap();
    assert!(age_at < gender_at);
    assert!(output.contains("Number: 2\n\nGender:\n"));
}
