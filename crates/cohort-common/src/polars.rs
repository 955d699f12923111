//! Cell-level helpers over Polars `AnyValue`.
//!
//! The cohort export is read as text, so most cells arrive as strings; numeric
//! arms exist for frames built in memory.

use polars::prelude::AnyValue;

/// Text of a cell as it would appear in the export.
///
/// Null becomes the empty string; floats print in their shortest form.
///
/// ```
/// use polars::prelude::AnyValue;
/// use cohort_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("WB")), "WB");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_owned(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    }
}

/// Shortest decimal form of `v`: `50`, `27.5`, `NaN`.
///
/// ```
/// use cohort_common::format_numeric;
///
/// assert_eq!(format_numeric(50.0), "50");
/// assert_eq!(format_numeric(27.5), "27.5");
/// assert_eq!(format_numeric(f64::NAN), "NaN");
/// ```
pub fn format_numeric(v: f64) -> String {
    // `-0` would otherwise leak into reports
    if v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}

/// Numeric value of a cell, or `None` for nulls, booleans and text that does
/// not parse.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        other if other.dtype().is_primitive_numeric() => other.extract::<f64>(),
        _ => None,
    }
}

/// Parses surrounding-whitespace-tolerant decimal text.
pub fn parse_f64(value: &str) -> Option<f64> {
    match value.trim() {
        "" => None,
        trimmed => trimmed.parse().ok(),
    }
}

/// True for cells the export uses to mean "no value": a lone backslash, or
/// nothing but whitespace.
///
/// ```
/// use cohort_common::is_blank_cell;
///
/// assert!(is_blank_cell("\\"));
/// assert!(is_blank_cell("   "));
/// assert!(!is_blank_cell("\\\\"));
/// assert!(!is_blank_cell("M"));
/// ```
pub fn is_blank_cell(value: &str) -> bool {
    value == "\\" || value.trim().is_empty()
}
