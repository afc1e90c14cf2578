//! Console summary for validation runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{RunSummary, ValidateResult};

pub fn print_summary(result: &ValidateResult) {
    println!("Input: {}", result.input.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Strategy"),
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Elapsed (ms)"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for run in &result.runs {
        table.add_row(vec![
            Cell::new(run.report.strategy.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(run.report.rows_processed),
            Cell::new(run.report.rows_accepted).fg(Color::Green),
            rejected_cell(run.report.rows_rejected),
            Cell::new(run.report.elapsed.as_millis()),
            output_cell(run),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rejected_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn output_cell(run: &RunSummary) -> Cell {
    match &run.output {
        Some(path) => Cell::new(path.display().to_string()),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
