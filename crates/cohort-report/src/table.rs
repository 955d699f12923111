use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cohort_common::format_numeric;
use cohort_model::{BinarySummary, DimensionSummary, NumericSummary};

/// Overview of all summaries, one row per dimension.
pub fn summary_table(summaries: &[DimensionSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("N"),
        header_cell("Figures"),
        header_cell("Ratio"),
        header_cell("Unrecognised"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for summary in summaries {
        let dimension = Cell::new(summary.dimension().name())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
        let row = match summary {
            DimensionSummary::Age(s) | DimensionSummary::Bmi(s) => vec![
                dimension,
                Cell::new(s.count),
                Cell::new(numeric_figures(s)),
                dim_cell("-"),
                dim_cell("-"),
            ],
            DimensionSummary::Gender(s)
            | DimensionSummary::Comorbidities(s)
            | DimensionSummary::Fov(s)
            | DimensionSummary::ProstheticLocation(s) => binary_row(dimension, s),
        };
        table.add_row(row);
    }
    table
}

fn numeric_figures(summary: &NumericSummary) -> String {
    format!(
        "mean {:.2}, median {}, sd {:.2}, range {}-{}",
        summary.mean,
        format_numeric(summary.median),
        summary.std_dev,
        format_numeric(summary.min),
        format_numeric(summary.max)
    )
}

fn binary_row(dimension: Cell, summary: &BinarySummary) -> Vec<Cell> {
    let labels = summary.labels;
    vec![
        dimension,
        Cell::new(summary.total),
        Cell::new(format!(
            "{} {} ({:.2}%), {} {} ({:.2}%)",
            labels.a_name,
            summary.count_a,
            summary.pct_a,
            labels.b_name,
            summary.count_b,
            summary.pct_b
        )),
        Cell::new(format!("1:{:.2}", summary.ratio)),
        unrecognized_cell(summary.unrecognized),
    ]
}

fn unrecognized_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_model::BinaryLabels;

    #[test]
    fn one_row_per_summary() {
        let summaries = [
            DimensionSummary::Age(NumericSummary {
                mean: 50.0,
                median: 50.0,
                std_dev: 14.142,
                max: 60.0,
                min: 40.0,
                count: 2,
            }),
            DimensionSummary::Fov(BinarySummary {
                labels: BinaryLabels::FOV,
                count_a: 3,
                pct_a: 75.0,
                count_b: 1,
                pct_b: 25.0,
                ratio: 1.0 / 3.0,
                unrecognized: 0,
                total: 4,
            }),
        ];

        let mut table = summary_table(&summaries);
        table.force_no_tty();
        let rendered = table.to_string();

        assert_eq!(table.row_count(), 2);
        assert!(rendered.contains("mean 50.00, median 50, sd 14.14, range 40-60"));
        assert!(rendered.contains("Targeted 3 (75.00%), Whole Body 1 (25.00%)"));
        assert!(rendered.contains("1:0.33"));
    }
}
