//! Preparation and fold-join of the tables of one suffix group.

use std::collections::HashSet;

use benchjoin_ingest::{ColumnKind, infer_column_kind, parse_decimal};
use polars::prelude::*;
use tracing::{debug, info};

use crate::comm::add_comm_columns;
use crate::error::{Result, TransformError};
use crate::rename::{namespace_columns, with_column_names};
use crate::types::{JoinOptions, SourceTable};

/// Hidden column holding the comparable form of the join field.
pub const JOIN_KEY_COLUMN: &str = "__benchjoin_key";

/// Adds communication totals (if enabled) and namespaces the columns of one
/// loaded file.
///
/// # Errors
///
/// Fails if the join field or a communication source column is missing.
pub fn prepare_table(table: SourceTable, options: &JoinOptions) -> Result<DataFrame> {
    let SourceTable {
        basename,
        frame: mut df,
    } = table;

    if df.get_column_index(&options.join_field).is_none() {
        return Err(TransformError::MissingColumn {
            column: options.join_field.clone(),
            table: basename,
        });
    }

    if options.add_comm {
        info!(table = %basename, "adding communication columns");
        add_comm_columns(&mut df, &basename)?;
    }

    namespace_columns(&mut df, &basename, &options.join_field)?;
    Ok(df)
}

/// Joins the tables of one suffix group.
///
/// Tables are prepared with [`prepare_table`] and then inner-joined on the
/// join field, left to right in the given order. Rows whose key has no match
/// in every table are dropped; duplicate keys produce every combination.
/// The join field appears once, holding the left-most table's text.
///
/// # Errors
///
/// Fails on an empty input, a missing column, or a Polars join failure.
pub fn join_tables(tables: Vec<SourceTable>, options: &JoinOptions) -> Result<DataFrame> {
    let mut joined: Option<DataFrame> = None;

    for table in tables {
        let basename = table.basename.clone();
        let mut df = prepare_table(table, options)?;
        add_join_key(&mut df, &options.join_field)?;

        joined = Some(match joined {
            None => df,
            Some(left) => {
                let right = right_side(df, &left, &options.join_field)?;
                let result = inner_join(left, right)?;
                debug!(table = %basename, rows = result.height(), "joined table");
                result
            }
        });
    }

    let joined = joined.ok_or(TransformError::NoTables)?;
    Ok(joined.drop(JOIN_KEY_COLUMN)?)
}

/// Adds [`JOIN_KEY_COLUMN`]: normalized decimals for a numeric join field,
/// the raw text otherwise. Nulls never match.
fn add_join_key(df: &mut DataFrame, join_field: &str) -> Result<()> {
    let column = df.column(join_field)?;
    let kind = infer_column_kind(column)?;
    let text = column.cast(&DataType::String)?;

    let keys: Vec<Option<String>> = text
        .str()?
        .iter()
        .map(|cell| {
            cell.map(|value| match kind {
                ColumnKind::Numeric => parse_decimal(value)
                    .map(|d| d.normalized().to_string())
                    .unwrap_or_else(|| value.to_string()),
                ColumnKind::Text => value.to_string(),
            })
        })
        .collect();
    df.with_column(Series::new(JOIN_KEY_COLUMN.into(), keys))?;
    Ok(())
}

/// Drops the right table's copy of the join field and renames any column
/// already present on the left.
fn right_side(right: DataFrame, left: &DataFrame, join_field: &str) -> Result<DataFrame> {
    let right = right.drop(join_field)?;

    let mut taken: HashSet<String> = left
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    taken.extend(right.get_column_names().iter().map(|n| n.to_string()));

    let mut names = Vec::with_capacity(right.width());
    for name in right.get_column_names() {
        let name = name.to_string();
        if name != JOIN_KEY_COLUMN && left.get_column_index(&name).is_some() {
            let renamed = disambiguate(&name, &taken);
            debug!(column = %name, renamed = %renamed, "renaming duplicate column");
            taken.insert(renamed.clone());
            names.push(renamed);
        } else {
            names.push(name);
        }
    }
    with_column_names(&right, names)
}

/// `x` -> `x2`, then `x2_2`, `x2_3`, ... until unused.
fn disambiguate(name: &str, taken: &HashSet<String>) -> String {
    let base = format!("{name}2");
    if !taken.contains(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn inner_join(left: DataFrame, right: DataFrame) -> Result<DataFrame> {
    let joined = left
        .lazy()
        .join(
            right.lazy(),
            [col(JOIN_KEY_COLUMN)],
            [col(JOIN_KEY_COLUMN)],
            JoinArgs {
                maintain_order: MaintainOrderJoin::LeftRight,
                ..JoinArgs::new(JoinType::Inner)
            },
        )
        .collect()?;
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_disambiguate() {
        let mut taken = HashSet::new();
        taken.insert("x".to_string());
        assert_eq!(disambiguate("x", &taken), "x2");
        taken.insert("x2".to_string());
        assert_eq!(disambiguate("x", &taken), "x2_2");
        taken.insert("x2_2".to_string());
        assert_eq!(disambiguate("x", &taken), "x2_3");
    }

    #[test]
    fn test_numeric_keys_compare_by_value() {
        let mut df = frame(vec![("k", vec!["10", "10.0", "7"])]);
        add_join_key(&mut df, "k").unwrap();
        let keys = df.column(JOIN_KEY_COLUMN).unwrap().str().unwrap();
        assert_eq!(keys.get(0), keys.get(1));
        assert_ne!(keys.get(0), keys.get(2));
    }

    #[test]
    fn test_text_keys_compare_by_text() {
        let mut df = frame(vec![("k", vec!["10", "ten"])]);
        add_join_key(&mut df, "k").unwrap();
        let keys = df.column(JOIN_KEY_COLUMN).unwrap().str().unwrap();
        assert_eq!(keys.get(0), Some("10"));
        assert_eq!(keys.get(1), Some("ten"));
    }

    #[test]
    fn test_prepare_requires_join_field() {
        let table = SourceTable::new("a", frame(vec![("x", vec!["1"])]));
        let result = prepare_table(table, &JoinOptions::default());
        assert!(matches!(result, Err(TransformError::MissingColumn { .. })));
    }

    #[test]
    fn test_right_side_renames_duplicates() {
        let left = frame(vec![("k", vec!["1"]), ("setupComm", vec!["5"])]);
        let right = frame(vec![("k", vec!["1"]), ("setupComm", vec!["6"]), ("t.b", vec!["7"])]);
        let right = right_side(right, &left, "k").unwrap();
        assert_eq!(names(&right), vec!["setupComm2", "t.b"]);
    }

    #[test]
    fn test_join_empty() {
        let result = join_tables(Vec::new(), &JoinOptions::default());
        assert!(matches!(result, Err(TransformError::NoTables)));
    }
}
