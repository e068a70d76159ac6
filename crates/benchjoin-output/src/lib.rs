//! CSV output for joined benchmark tables.
//!
//! Each suffix group is written to `{output}_{suffix}.csv` as comma-separated
//! text with a header row, whatever delimiter the inputs used.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

/// Errors raised while writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created.
    #[error("failed to create {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to serialize the table.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Output path for a suffix group: `{output}_{suffix}.csv`.
pub fn output_path(output: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{output}_{suffix}.csv"))
}

/// Writes `df` to `path` as comma-separated CSV with a header row.
///
/// Nulls are written as empty fields. An existing file is replaced.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::FileCreate {
        path: path.to_path_buf(),
        source: e,
    })?;

    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|e| OutputError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote csv"
    );
    Ok(())
}
