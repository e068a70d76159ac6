//! Communication totals.
//!
//! `{phase}Comm = communication.{phase}CommSent + communication.{phase}CommRecv`
//! for the setup and online phases.

use benchjoin_ingest::{is_null_token, parse_decimal};
use bigdecimal::BigDecimal;
use polars::prelude::*;

use crate::error::{Result, TransformError};

pub const SETUP_COMM: &str = "setupComm";
pub const ONLINE_COMM: &str = "onlineComm";

const PHASES: [(&str, &str); 2] = [("setup", SETUP_COMM), ("online", ONLINE_COMM)];

/// Appends `setupComm` and `onlineComm` to `df`.
///
/// A null in either source cell gives a null total.
///
/// # Errors
///
/// Fails if a source column is missing or holds a non-numeric value.
pub fn add_comm_columns(df: &mut DataFrame, table: &str) -> Result<()> {
    for (phase, target) in PHASES {
        let sent = decimal_cells(df, &format!("communication.{phase}CommSent"), table)?;
        let recv = decimal_cells(df, &format!("communication.{phase}CommRecv"), table)?;

        let totals: Vec<Option<String>> = sent
            .iter()
            .zip(&recv)
            .map(|(sent, recv)| match (sent, recv) {
                (Some(sent), Some(recv)) => Some((sent + recv).to_string()),
                _ => None,
            })
            .collect();
        df.with_column(Series::new(target.into(), totals))?;
    }
    Ok(())
}

fn decimal_cells(df: &DataFrame, column: &str, table: &str) -> Result<Vec<Option<BigDecimal>>> {
    let Some(idx) = df.get_column_index(column) else {
        return Err(TransformError::MissingColumn {
            column: column.to_string(),
            table: table.to_string(),
        });
    };
    let text = df.get_columns()[idx].cast(&DataType::String)?;
    text.str()?
        .iter()
        .map(|cell| match cell {
            None => Ok(None),
            Some(value) if is_null_token(value) => Ok(None),
            Some(value) => parse_decimal(value).map(Some).ok_or_else(|| {
                TransformError::NonNumericValue {
                    column: column.to_string(),
                    value: value.to_string(),
                    table: table.to_string(),
                }
            }),
        })
        .collect()
}
