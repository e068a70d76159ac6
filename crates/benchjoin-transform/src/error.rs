//! Error types for table transformation.

use thiserror::Error;

/// Errors raised while preparing, joining, or selecting benchmark tables.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required column is absent from a table.
    #[error("column '{column}' not found in {table}")]
    MissingColumn { column: String, table: String },

    /// A communication source cell is not a decimal number.
    #[error("non-numeric value '{value}' in column '{column}' of {table}")]
    NonNumericValue {
        column: String,
        value: String,
        table: String,
    },

    /// A join was requested over zero tables.
    #[error("no tables to join")]
    NoTables,

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<benchjoin_ingest::IngestError> for TransformError {
    fn from(err: benchjoin_ingest::IngestError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = TransformError::MissingColumn {
            column: "parameters.dbSize".to_string(),
            table: "a".to_string(),
        };
        assert_eq!(err.to_string(), "column 'parameters.dbSize' not found in a");
    }
}
