use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("{}", summary_table(result));
}

pub fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Suffix"),
        header_cell("Files"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for group in &result.groups {
        let rows = if group.rows == 0 {
            Cell::new(group.rows).fg(Color::Yellow)
        } else {
            Cell::new(group.rows)
        };
        table.add_row(vec![
            Cell::new(&group.suffix).fg(Color::Cyan),
            Cell::new(group.file_count),
            rows,
            Cell::new(group.columns),
            Cell::new(group.output.display()),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::GroupSummary;

    #[test]
    fn test_summary_lists_every_group() {
        let result = RunResult {
            groups: vec![
                GroupSummary {
                    suffix: "x".to_string(),
                    file_count: 2,
                    rows: 3,
                    columns: 5,
                    output: PathBuf::from("out_x.csv"),
                },
                GroupSummary {
                    suffix: "y".to_string(),
                    file_count: 2,
                    rows: 0,
                    columns: 5,
                    output: PathBuf::from("out_y.csv"),
                },
            ],
        };

        let table = summary_table(&result);
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("out_x.csv"));
        assert!(rendered.contains("out_y.csv"));
    }
}
