use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cohort file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Larger than the reader's byte limit.
    #[error("{path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Starts with a UTF-16 byte order mark; the export must be UTF-8.
    #[error("{path} is {encoding}, expected UTF-8")]
    Utf16 {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("cannot parse {path} as CSV: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path} has a header but no data rows")]
    NoRows { path: PathBuf },

    /// Header cell `index` (0-based) is empty.
    #[error("{path} has an unnamed column at position {index}")]
    UnnamedColumn { path: PathBuf, index: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = IngestError::NotFound {
            path: PathBuf::from("/data/knee_and_hip.csv"),
        };
        assert_eq!(err.to_string(), "cohort file not found: /data/knee_and_hip.csv");

        let err = IngestError::TooLarge {
            path: PathBuf::from("cohort.csv"),
            size: 2048,
            limit: 1024,
        };
        assert_eq!(err.to_string(), "cohort.csv is 2048 bytes, limit is 1024");
    }
}
