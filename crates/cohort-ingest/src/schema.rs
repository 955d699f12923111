use cohort_model::Projection;
use polars::prelude::DataFrame;
use tracing::warn;

/// Projection columns absent from `df`, in projection order, each logged as a warning.
///
/// Not an error: normalization and plotting skip absent columns, and the
/// statistics that need one fail on their own.
pub fn report_schema_gaps(df: &DataFrame) -> Vec<String> {
    let present = df.get_column_names();
    Projection::ALL
        .iter()
        .flat_map(|projection| {
            projection
                .columns()
                .iter()
                .filter(|column| !present.iter().any(|name| name.as_str() == **column))
                .map(move |column| (*projection, *column))
        })
        .inspect(|(projection, column)| {
            warn!(column = %column, projection = %projection, "expected column not found");
        })
        .map(|(_, column)| column.to_string())
        .collect()
}
