use std::time::Instant;

use anyhow::{Context, Result};
use benchjoin_ingest::{
    ColumnKind, FileGroup, delimiter_byte, group_files, infer_column_kinds, read_csv_table,
};
use benchjoin_output::{output_path, write_csv_table};
use benchjoin_transform::{JoinOptions, SourceTable, join_tables, select_output_columns};
use tracing::{debug, info, info_span};

use crate::config::JoinConfig;
use crate::types::{GroupSummary, RunResult};

/// Joins every suffix group and writes one output file per group.
///
/// Groups are processed in order and the first failure aborts the run.
pub fn run_join(config: &JoinConfig) -> Result<RunResult> {
    let delimiter = delimiter_byte(&config.delimiter).context("resolve input delimiter")?;
    let groups = group_files(&config.basenames).context("group input files")?;
    info!(
        basename_count = config.basenames.len(),
        group_count = groups.len(),
        "grouped input files"
    );

    let options = config.join_options();
    let mut result = RunResult::default();
    for group in &groups {
        let span = info_span!("group", suffix = %group.suffix);
        let summary = span.in_scope(|| run_group(group, delimiter, &options, &config.output))?;
        result.groups.push(summary);
    }
    Ok(result)
}

fn run_group(
    group: &FileGroup,
    delimiter: u8,
    options: &JoinOptions,
    output: &str,
) -> Result<GroupSummary> {
    let start = Instant::now();

    let mut tables = Vec::with_capacity(group.files.len());
    for (basename, path) in &group.files {
        let frame = read_csv_table(path, delimiter)
            .with_context(|| format!("load {}", path.display()))?;
        let kinds = infer_column_kinds(&frame)
            .with_context(|| format!("infer column types of {}", path.display()))?;
        let numeric = kinds
            .iter()
            .filter(|(_, kind)| *kind == ColumnKind::Numeric)
            .count();
        debug!(
            basename = %basename,
            columns = kinds.len(),
            numeric_columns = numeric,
            rows = frame.height(),
            "loaded table"
        );
        tables.push(SourceTable::new(basename.clone(), frame));
    }

    let joined = join_tables(tables, options)
        .with_context(|| format!("join files for suffix {}", group.suffix))?;
    let mut selected = select_output_columns(&joined, options)
        .with_context(|| format!("select output columns for suffix {}", group.suffix))?;

    let path = output_path(output, group.suffix.label());
    write_csv_table(&mut selected, &path)
        .with_context(|| format!("write {}", path.display()))?;

    info!(
        suffix = %group.suffix,
        rows = selected.height(),
        columns = selected.width(),
        duration_ms = start.elapsed().as_millis(),
        "group complete"
    );
    Ok(GroupSummary {
        suffix: group.suffix.to_string(),
        file_count: group.files.len(),
        rows: selected.height(),
        columns: selected.width(),
        output: path,
    })
}
