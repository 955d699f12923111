//! Column value extraction.

use cohort_common::{any_to_f64, any_to_string};
use polars::prelude::{AnyValue, Column, DataFrame};

use crate::error::{Result, StatsError};

pub(crate) fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| StatsError::ColumnNotFound {
        column: name.to_string(),
    })
}

fn parse_cell(name: &str, row: usize, value: AnyValue<'_>) -> Result<Option<f64>> {
    if value.is_null() {
        return Ok(None);
    }
    let text = any_to_string(value.clone());
    match any_to_f64(value) {
        Some(number) => Ok(Some(number)),
        None => Err(StatsError::NonNumeric {
            column: name.to_string(),
            row,
            value: text,
        }),
    }
}

/// Non-missing values of a numeric column, in row order.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = column(df, name)?;
    let mut values = Vec::with_capacity(column.len() - column.null_count());
    for row in 0..column.len() {
        if let Some(number) = parse_cell(name, row, column.get(row)?)? {
            values.push(number);
        }
    }
    Ok(values)
}

/// Per-row numbers of a column, `None` where the cell is missing.
pub fn optional_numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = column(df, name)?;
    let mut values = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        values.push(parse_cell(name, row, column.get(row)?)?);
    }
    Ok(values)
}

/// Rows where both columns hold a number, as `(x, y)` pairs in row order.
pub fn paired_values(df: &DataFrame, x: &str, y: &str) -> Result<Vec<(f64, f64)>> {
    let x_column = column(df, x)?;
    let y_column = column(df, y)?;
    let mut pairs = Vec::new();
    for row in 0..df.height() {
        let x_value = parse_cell(x, row, x_column.get(row)?)?;
        let y_value = parse_cell(y, row, y_column.get(row)?)?;
        if let (Some(x_value), Some(y_value)) = (x_value, y_value) {
            pairs.push((x_value, y_value));
        }
    }
    Ok(pairs)
}

/// Non-missing values of a column rendered as text, in row order.
pub fn text_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = column(df, name)?;
    let mut values = Vec::with_capacity(column.len() - column.null_count());
    for row in 0..column.len() {
        let value = column.get(row)?;
        if !value.is_null() {
            values.push(any_to_string(value));
        }
    }
    Ok(values)
}

/// Per-row text of a column, `None` where the cell is missing.
pub fn optional_text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = column(df, name)?;
    let mut values = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        let value = column.get(row)?;
        values.push((!value.is_null()).then(|| any_to_string(value)));
    }
    Ok(values)
}
