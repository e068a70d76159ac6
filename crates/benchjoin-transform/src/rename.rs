//! Namespacing of columns by basename.

use polars::prelude::*;

use crate::comm::{ONLINE_COMM, SETUP_COMM};
use crate::error::Result;

/// Name of `column` after tagging with `basename`.
///
/// The join field and the communication totals keep their names.
pub fn namespaced_name(column: &str, basename: &str, join_field: &str) -> String {
    if column == join_field || column == SETUP_COMM || column == ONLINE_COMM {
        column.to_string()
    } else {
        format!("{column}.{basename}")
    }
}

/// Renames every column of `df` to `{column}.{basename}`, except the join
/// field and the communication totals.
pub fn namespace_columns(df: &mut DataFrame, basename: &str, join_field: &str) -> Result<()> {
    let renamed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| namespaced_name(name.as_str(), basename, join_field))
        .collect();
    *df = with_column_names(df, renamed)?;
    Ok(())
}

/// Rebuilds `df` with `names` assigned to its columns in order.
pub(crate) fn with_column_names(df: &DataFrame, names: Vec<String>) -> Result<DataFrame> {
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .cloned()
        .zip(names)
        .map(|(column, name)| column.with_name(name.into()))
        .collect();
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_name() {
        assert_eq!(
            namespaced_name("setupTime.mean", "a", "parameters.dbSize"),
            "setupTime.mean.a"
        );
        assert_eq!(
            namespaced_name("parameters.dbSize", "a", "parameters.dbSize"),
            "parameters.dbSize"
        );
        assert_eq!(namespaced_name(SETUP_COMM, "a", "k"), SETUP_COMM);
        assert_eq!(namespaced_name(ONLINE_COMM, "a", "k"), ONLINE_COMM);
    }

    #[test]
    fn test_namespaced_name_keeps_directory() {
        assert_eq!(
            namespaced_name("setupTime.mean", "runs/lan/bench", "k"),
            "setupTime.mean.runs/lan/bench"
        );
        assert_ne!(
            namespaced_name("setupTime.mean", "lan/bench", "k"),
            namespaced_name("setupTime.mean", "wan/bench", "k")
        );
    }

    #[test]
    fn test_namespace_columns() {
        let mut df = DataFrame::new(vec![
            Series::new("k".into(), vec!["1"]).into_column(),
            Series::new("t".into(), vec!["2"]).into_column(),
            Series::new(SETUP_COMM.into(), vec!["3"]).into_column(),
        ])
        .unwrap();

        namespace_columns(&mut df, "run", "k").unwrap();

        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["k", "t.run", SETUP_COMM]);
    }

    #[test]
    fn test_namespace_columns_with_clashing_names() {
        // `t` becomes `t.b`, which is already a column name before renaming.
        let mut df = DataFrame::new(vec![
            Series::new("k".into(), vec!["1"]).into_column(),
            Series::new("t".into(), vec!["2"]).into_column(),
            Series::new("t.b".into(), vec!["3"]).into_column(),
        ])
        .unwrap();

        namespace_columns(&mut df, "b", "k").unwrap();

        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["k", "t.b", "t.b.b"]);
    }
}
