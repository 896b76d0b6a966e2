use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Source: {}", result.source.display());
    println!("Inserted {} rows", result.inserted);
    println!("Rejected {} rows", result.rejected);
    match &result.outputs {
        Some(outputs) => {
            println!("Clean table: {}", outputs.clean_csv.display());
            println!("Rejects log: {}", outputs.rejects_jsonl.display());
            println!("Rejects summary: {}", outputs.rejects_csv.display());
        }
        None => println!("Dry run: no files written"),
    }
    print_reason_table(result);
}

fn print_reason_table(result: &RunResult) {
    if result.reason_counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Reason"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (reason, count) in &result.reason_counts {
        table.add_row(vec![Cell::new(reason), count_cell(*count)]);
    }
    println!();
    println!("Rejection reasons:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
