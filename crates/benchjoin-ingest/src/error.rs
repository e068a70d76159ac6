//! Error types for benchmark CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while grouping and loading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Grouping Errors ===
    /// Basenames and discovered suffixes do not line up with files on disk.
    #[error("file grouping failed: {reason}")]
    FileGrouping { reason: String },

    /// A basename lacks the file for a suffix discovered from the first basename.
    #[error("missing {path} for suffix '{suffix}' (found for '{reference}')")]
    MissingSuffixFile {
        path: PathBuf,
        suffix: String,
        reference: String,
    },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Delimiter is not a single byte.
    #[error("delimiter must be a single byte, got {delimiter:?}")]
    InvalidDelimiter { delimiter: String },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row has no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("runs/a.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: runs/a.csv");
    }

    #[test]
    fn test_missing_suffix_display() {
        let err = IngestError::MissingSuffixFile {
            path: PathBuf::from("b_x.csv"),
            suffix: "x".to_string(),
            reference: "a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing b_x.csv for suffix 'x' (found for 'a')"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
