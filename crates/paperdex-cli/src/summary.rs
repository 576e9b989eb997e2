//! Human-readable output on stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use paperdex_model::PillarSource;

use crate::pipeline::ExportReport;

/// The one-line success message.
///
/// Derived pillars also report the pillar count.
pub fn summary_line(report: &ExportReport) -> String {
    let output = report.output.display();
    match report.pillar_source {
        PillarSource::Fixed => format!("Wrote {output} with {} papers.", report.papers),
        PillarSource::Derived => format!(
            "Wrote {output} with {} papers and {} pillars.",
            report.papers, report.pillars
        ),
    }
}

pub fn print_summary(report: &ExportReport) {
    println!("{}", summary_line(report));
}

/// Per-column fill counts.
pub fn stats_table(report: &ExportReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Filled"),
        header_cell("Empty"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &report.columns {
        let empty = report.papers.saturating_sub(column.filled);
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.filled),
            count_cell(empty, Color::Yellow),
        ]);
    }
    table
}

pub fn print_stats(report: &ExportReport) {
    if report.columns.is_empty() {
        println!("No papers; nothing to tabulate.");
        return;
    }
    println!("{}", stats_table(report));
}

/// Sheet names with their position in the workbook.
pub fn sheets_table(names: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Sheet")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, name) in names.iter().enumerate() {
        table.add_row(vec![Cell::new(idx + 1), Cell::new(name)]);
    }
    table
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
