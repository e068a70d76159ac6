//! Column type inference.
//!
//! A column is numeric when it has at least one value and every non-null
//! value parses as a decimal. Numeric values are handled as `BigDecimal` so
//! sums of benchmark figures carry no floating-point error.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use polars::prelude::*;

use crate::error::Result;

/// Inferred type of a loaded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Cell values read as missing, compared trimmed and case-insensitively.
pub const NULL_TOKENS: [&str; 6] = ["", "na", "n/a", "none", "null", "."];

/// Returns true if the cell is one of the [`NULL_TOKENS`].
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    NULL_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Parses a cell as an exact decimal. Surrounding whitespace is ignored.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    BigDecimal::from_str(trimmed).ok()
}

/// Infers the kind of a single column.
pub fn infer_column_kind(column: &Column) -> Result<ColumnKind> {
    let text = column.cast(&DataType::String)?;
    let values = text.str()?;

    let mut seen = false;
    for value in values.iter().flatten() {
        if parse_decimal(value).is_none() {
            return Ok(ColumnKind::Text);
        }
        seen = true;
    }
    Ok(if seen {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    })
}

/// Infers kinds for every column, in frame order.
pub fn infer_column_kinds(df: &DataFrame) -> Result<Vec<(String, ColumnKind)>> {
    df.get_columns()
        .iter()
        .map(|column| Ok((column.name().to_string(), infer_column_kind(column)?)))
        .collect()
}
