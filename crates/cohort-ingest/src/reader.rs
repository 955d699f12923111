//! Loading the cohort export.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Default byte limit for a cohort export.
pub const MAX_CSV_BYTES: u64 = 500 * 1024 * 1024;

const UTF16_MARKS: [([u8; 2], &str); 2] = [
    ([0xFF, 0xFE], "UTF-16 LE"),
    ([0xFE, 0xFF], "UTF-16 BE"),
];

/// Reads the cohort CSV with every column typed as text.
///
/// Empty fields become null. Other blank markers (a lone backslash,
/// whitespace) are kept verbatim for the missing-value normalizer.
pub fn read_cohort_csv(path: &Path) -> Result<DataFrame> {
    read_cohort_csv_with_limit(path, MAX_CSV_BYTES)
}

/// [`read_cohort_csv`] with a caller-chosen byte limit.
pub fn read_cohort_csv_with_limit(path: &Path, limit: u64) -> Result<DataFrame> {
    preflight(path, limit)?;

    let parse_error = |e: polars::prelude::PolarsError| IngestError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    check_shape(&df, path)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "cohort csv loaded"
    );
    Ok(df)
}

/// Size and byte-order-mark checks, done on one handle before Polars sees the file.
fn preflight(path: &Path, limit: u64) -> Result<()> {
    let io_error = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => IngestError::NotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    let mut file = File::open(path).map_err(io_error)?;
    let size = file.metadata().map_err(io_error)?.len();
    if size > limit {
        return Err(IngestError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    let mut head = Vec::with_capacity(2);
    file.by_ref().take(2).read_to_end(&mut head).map_err(io_error)?;
    if let Some(&(_, encoding)) = UTF16_MARKS.iter().find(|(mark, _)| head == mark) {
        return Err(IngestError::Utf16 {
            path: path.to_path_buf(),
            encoding,
        });
    }
    Ok(())
}

fn check_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::NoRows {
            path: path.to_path_buf(),
        });
    }
    if let Some(index) = df
        .get_column_names()
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(IngestError::UnnamedColumn {
            path: path.to_path_buf(),
            index,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn columns_stay_text() {
        let file = csv_file(b"id,Age,Gender\n1,40,M\n2,\\,F\n");
        let df = read_cohort_csv(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("Age").unwrap().dtype(), &DataType::String);
        let ages: Vec<Option<&str>> =
            df.column("Age").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(ages, vec![Some("40"), Some("\\")]);
    }

    #[test]
    fn empty_fields_are_null() {
        let file = csv_file(b"Age,BMI\n40,\n,31.5\n");
        let df = read_cohort_csv(file.path()).unwrap();

        assert_eq!(df.column("BMI").unwrap().null_count(), 1);
        assert_eq!(df.column("Age").unwrap().null_count(), 1);
    }

    #[test]
    fn header_without_rows() {
        let file = csv_file(b"Age,Gender\n");
        assert!(matches!(
            read_cohort_csv(file.path()),
            Err(IngestError::NoRows { .. })
        ));
    }

    #[test]
    fn absent_file() {
        assert!(matches!(
            read_cohort_csv(Path::new("/nonexistent/cohort.csv")),
            Err(IngestError::NotFound { .. })
        ));
    }

    #[test]
    fn utf16_little_endian_is_rejected() {
        let file = csv_file(&[0xFF, 0xFE, b'A', 0]);
        assert!(matches!(
            read_cohort_csv(file.path()),
            Err(IngestError::Utf16 {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn byte_limit() {
        let file = csv_file(b"Age\n40\n");
        assert!(matches!(
            read_cohort_csv_with_limit(file.path(), 2),
            Err(IngestError::TooLarge { size: 7, limit: 2, .. })
        ));
        assert!(read_cohort_csv_with_limit(file.path(), 7).is_ok());
    }
}
