//! Benchmark result ingestion.
//!
//! This crate locates the CSV files that belong together and loads them into
//! Polars DataFrames.
//!
//! # Features
//!
//! - **File Grouping**: Resolve `{basename}.csv` or `{basename}_{suffix}.csv`
//!   files into one join group per suffix
//! - **CSV Loading**: Read delimited files with every column kept as text
//! - **Type Inference**: Classify columns as numeric (exact decimal) or text
//!
//! # Example
//!
//! ```ignore
//! use benchjoin_ingest::{group_files, read_csv_table};
//!
//! let groups = group_files(&["runs/a".to_string(), "runs/b".to_string()])?;
//! for group in &groups {
//!     for (basename, path) in &group.files {
//!         let table = read_csv_table(path, b',')?;
//!     }
//! }
//! ```

mod csv;
mod error;
mod grouping;
mod kind;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{delimiter_byte, read_csv_table};

// === File Grouping ===
pub use grouping::{FileGroup, FileGroups, SINGLE_SUFFIX_LABEL, Suffix, group_files};

// === Column Types ===
pub use kind::{
    ColumnKind, NULL_TOKENS, infer_column_kind, infer_column_kinds, is_null_token, parse_decimal,
};
