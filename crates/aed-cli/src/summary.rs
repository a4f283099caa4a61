use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aed_model::SkipCategory;
use aed_cli::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if result.written {
        println!("Output: {}", result.output.display());
    } else {
        println!("Output: {} (dry run, not written)", result.output.display());
    }
    if let Some(path) = &result.skip_report {
        println!("Skip report: {}", path.display());
    }
    println!("Region: {}", result.region);
    println!("Cleaned records: {}", result.run.accepted_count());
    println!("Skipped records: {}", result.run.skipped_count());
    println!("Dates kept as text: {}", result.run.unparsed_date_count());
    println!("SHA-256: {}", result.sha256);
    print_skip_table(result);
}

fn print_skip_table(result: &CleanResult) {
    let counts = result.run.skip_counts();
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Reason"),
        header_cell("Category"),
        header_cell("Count"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for count in &counts {
        table.add_row(vec![
            Cell::new(count.code),
            Cell::new(count.label),
            category_cell(count.category),
            count_cell(count.count, category_color(count.category)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(result.run.skipped_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Skipped:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_color(category: SkipCategory) -> Color {
    match category {
        SkipCategory::Structural => Color::Red,
        SkipCategory::Region => Color::Yellow,
        SkipCategory::Unexpected => Color::Magenta,
    }
}

fn category_cell(category: SkipCategory) -> Cell {
    Cell::new(category.label()).fg(category_color(category))
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
