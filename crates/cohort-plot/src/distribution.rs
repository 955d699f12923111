//! Categorical count panels laid out two per row.

use cohort_stats::optional_text_values;
use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::error::Result;
use crate::figure::{Figure, Palette, Panel, PanelKind};

pub const DISTRIBUTION_COLUMNS: usize = 2;

/// Category counts ordered by descending frequency; ties keep first appearance.
pub fn category_counts<I, S>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        let value = value.as_ref();
        match counts.iter_mut().find(|(category, _)| category.as_str() == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// One count panel per column in a two-column grid.
///
/// Panel `i` sits in cell `i`. An absent column leaves its cell empty and adds
/// a warning; the remaining columns are still plotted.
pub fn distribution_figure(df: &DataFrame, columns: &[&str]) -> Result<Figure> {
    let rows = columns.len().div_ceil(DISTRIBUTION_COLUMNS);
    let mut figure = Figure::new("Scan Outcomes", rows, DISTRIBUTION_COLUMNS);

    for (index, &column) in columns.iter().enumerate() {
        if df.column(column).is_err() {
            warn!(column = %column, "column not found, skipping distribution panel");
            figure
                .warnings
                .push(format!("Column '{column}' not found in dataset"));
            continue;
        }

        let values = optional_text_values(df, column)?;
        let (categories, counts): (Vec<String>, Vec<usize>) =
            category_counts(values.iter().flatten()).into_iter().unzip();
        let palette = Palette::cycled(index);
        debug!(
            column = %column,
            categories = categories.len(),
            palette = palette.name(),
            "distribution panel"
        );

        figure.panels.push(Panel {
            cell: index,
            title: format!("Distribution of {column}"),
            x_label: "Outcome".to_string(),
            y_label: "Count".to_string(),
            kind: PanelKind::Counts {
                categories,
                counts,
                palette,
            },
        });
    }

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_order_by_frequency_then_appearance() {
        let counts = category_counts(["b", "a", "c", "a", "b", "d", "a"]);
        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn no_values_no_categories() {
        assert!(category_counts(Vec::<String>::new()).is_empty());
    }
}
