//! Delimited file reading into text-typed DataFrames.

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::kind::is_null_token;

/// Converts a configured delimiter into the byte Polars expects.
pub fn delimiter_byte(delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(IngestError::InvalidDelimiter {
            delimiter: delimiter.to_string(),
        }),
    }
}

fn file_len(path: &Path) -> Result<u64> {
    std::fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
}

/// Reads a delimited file into a DataFrame.
///
/// Schema inference is disabled: every column is loaded as `String` so values
/// are written back exactly as read. Empty fields and the
/// [`NULL_TOKENS`](crate::NULL_TOKENS) become nulls.
pub fn read_csv_table(path: &Path, delimiter: u8) -> Result<DataFrame> {
    if file_len(path)? == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(delimiter))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df
        .get_column_names()
        .iter()
        .all(|name| name.trim().is_empty())
    {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let df = null_tokens_to_nulls(&df)?;
    debug!(
        path = %path.display(),
        columns = df.width(),
        rows = df.height(),
        "loaded csv"
    );
    Ok(df)
}

fn null_tokens_to_nulls(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            let cleaned: StringChunked = column
                .str()?
                .iter()
                .map(|cell| cell.filter(|value| !is_null_token(value)))
                .collect();
            Ok(cleaned.with_name(column.name().clone()).into_column())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DataFrame::new(columns)?)
}
