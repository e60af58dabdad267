use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheetwise_cli::commands::CleanOutcome;
use sheetwise_engine::{Dataset, PivotTable, health_score};
use sheetwise_model::{ColumnType, IssueSeverity, PivotConfig, Value};

pub fn print_profile(dataset: &Dataset) {
    println!("Dataset: {}", dataset.name());
    println!(
        "Rows: {}  Columns: {}  Health: {:.0}",
        dataset.row_count(),
        dataset.column_count(),
        health_score(dataset)
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Unique"),
        header_cell("Sample"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for profile in dataset.profile() {
        let name = if profile.is_geo {
            Cell::new(format!("{} (geo)", profile.name))
        } else {
            Cell::new(&profile.name)
        };
        table.add_row(vec![
            name.add_attribute(Attribute::Bold),
            type_cell(profile.column_type),
            count_cell(profile.missing_count, Color::Yellow),
            Cell::new(profile.unique_count),
            Cell::new(sample_text(&profile.sample)),
        ]);
    }
    println!("{table}");
}

pub fn print_issues(dataset: &Dataset) {
    if dataset.is_clean() {
        println!("No issues detected in {}.", dataset.name());
        return;
    }
    println!("Detected issues ({}):", dataset.issues().len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Type"),
        header_cell("Severity"),
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut issues: Vec<_> = dataset.issues().iter().collect();
    // Stable: detection order is kept within a severity.
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));
    for issue in issues {
        table.add_row(vec![
            Cell::new(&issue.id),
            Cell::new(issue.kind),
            severity_cell(issue.severity),
            issue.column.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            if issue.affected_rows.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(issue.affected_rows.len())
            },
            Cell::new(&issue.description),
        ]);
    }
    println!("{table}");
}

pub fn print_clean(outcome: &CleanOutcome) {
    for step in &outcome.steps {
        println!("- {step}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Rows"),
        header_cell("Issues"),
        header_cell("Health"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (label, dataset) in [("Before", &outcome.before), ("After", &outcome.after)] {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(dataset.row_count()),
            count_cell(dataset.issues().len(), Color::Yellow),
            Cell::new(format!("{:.0}", health_score(dataset))),
        ]);
    }
    println!("{table}");
    if let Some(path) = &outcome.output {
        println!("Output: {}", path.display());
    }
    if !outcome.after.is_clean() {
        print_issues(&outcome.after);
    }
}

pub fn print_pivot(config: &PivotConfig, table_data: &PivotTable) {
    if table_data.is_empty() {
        println!("Pivot table empty.");
        return;
    }
    let agg = table_data
        .aggregation()
        .map_or("count", sheetwise_model::Aggregation::as_str);
    let value = config
        .primary_value()
        .map_or_else(String::new, |field| field.field.clone());
    println!("{agg} of {value}");

    let column_keys = table_data.column_keys();
    let mut header = vec![header_cell(&format!(
        "{} \\ {}",
        config.rows.join(", "),
        config.columns.join(", ")
    ))];
    header.extend(column_keys.iter().copied().map(header_cell));

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 1..=column_keys.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row_key in table_data.row_keys() {
        let mut cells = vec![Cell::new(row_key).add_attribute(Attribute::Bold)];
        for col_key in &column_keys {
            cells.push(match table_data.value(row_key, col_key) {
                Some(value) => Cell::new(Value::Number(value)),
                None => dim_cell("-"),
            });
        }
        table.add_row(cells);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn sample_text(sample: &[Value]) -> String {
    sample
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn type_cell(column_type: ColumnType) -> Cell {
    let color = match column_type {
        ColumnType::Number => Color::Green,
        ColumnType::Date => Color::Blue,
        ColumnType::Boolean => Color::Magenta,
        ColumnType::Mixed => Color::Yellow,
        ColumnType::String => Color::White,
    };
    Cell::new(column_type).fg(color)
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::High => Cell::new("HIGH")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        IssueSeverity::Low => Cell::new("LOW").fg(Color::DarkGrey),
    }
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
