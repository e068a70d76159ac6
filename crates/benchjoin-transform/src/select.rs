//! Output column selection.

use polars::prelude::*;

use crate::comm::{ONLINE_COMM, SETUP_COMM};
use crate::error::{Result, TransformError};
use crate::types::JoinOptions;

/// Chooses output columns from `available`, in output order.
///
/// The join field comes first, then the communication totals when enabled,
/// then every other column starting with one of `options.fields`, in table
/// order. No column is listed twice.
pub fn output_columns<S: AsRef<str>>(available: &[S], options: &JoinOptions) -> Vec<String> {
    let mut selected = vec![options.join_field.clone()];
    if options.add_comm {
        for name in [SETUP_COMM, ONLINE_COMM] {
            if !selected.iter().any(|s| s == name) {
                selected.push(name.to_string());
            }
        }
    }

    for name in available {
        let name: &str = name.as_ref();
        let wanted = options
            .fields
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()));
        if wanted && !selected.iter().any(|s| s == name) {
            selected.push(name.to_string());
        }
    }
    selected
}

/// Projects the joined table onto [`output_columns`].
///
/// # Errors
///
/// Fails if the join field or an enabled communication total is absent.
pub fn select_output_columns(df: &DataFrame, options: &JoinOptions) -> Result<DataFrame> {
    let available: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    let selected = output_columns(&available, options);

    if let Some(missing) = selected
        .iter()
        .find(|name| !available.iter().any(|a| a == *name))
    {
        return Err(TransformError::MissingColumn {
            column: missing.clone(),
            table: "joined table".to_string(),
        });
    }

    Ok(df.select(selected)?)
}
