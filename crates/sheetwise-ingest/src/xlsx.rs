//! Spreadsheet workbook decoding (`.xlsx`, `.xlsm`, `.xls`, `.ods`).
//!
//! Only the first worksheet is read. Its first row is the header; every
//! following non-blank row becomes a record. Cells keep the type the workbook
//! stored: numbers stay numbers and text stays text.

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use sheetwise_engine::Dataset;
use sheetwise_model::{EngineOptions, Row, Value};

use crate::csv::{check_file_size, file_display_name};
use crate::error::{IngestError, Result};

/// Days between the Excel epoch (1899-12-30) and 1970-01-01.
const EXCEL_UNIX_EPOCH_DAYS: i64 = 25_569;

/// Reads the first worksheet of a workbook into a [`Dataset`].
pub fn read_workbook_dataset(path: &Path, options: &EngineOptions) -> Result<Dataset> {
    check_file_size(path)?;
    let name = file_display_name(path);
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let sheet = workbook.sheet_names().first().cloned();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    tracing::debug!(name, sheet = ?sheet, "decoding workbook");
    range_to_dataset(&name, &range, options)
}

/// Builds a dataset from a worksheet range: header row, then data rows.
fn range_to_dataset(name: &str, range: &Range<Data>, options: &EngineOptions) -> Result<Dataset> {
    let mut sheet_rows = range.rows();
    let header = sheet_rows.next().ok_or_else(|| IngestError::NoHeaderDetected {
        name: name.to_string(),
    })?;

    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    if columns.is_empty() {
        return Err(IngestError::NoHeaderDetected {
            name: name.to_string(),
        });
    }
    if columns.iter().any(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            name: name.to_string(),
        });
    }

    let rows: Vec<Row> = sheet_rows
        .filter(|cells| !cells.iter().all(DataType::is_empty))
        .map(|cells| {
            columns
                .iter()
                .zip(cells.iter().map(cell_to_value).chain(std::iter::repeat(Value::Absent)))
                .map(|(column, value)| (column.clone(), value))
                .collect()
        })
        .collect();
    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            name: name.to_string(),
        });
    }

    tracing::info!(name, rows = rows.len(), columns = columns.len(), "loaded workbook");
    Ok(Dataset::with_options(name, columns, rows, options.clone())?)
}

/// Converts a workbook cell to a cell [`Value`].
///
/// Empty cells become `Absent`. Date-time serials become calendar dates;
/// error cells keep their display text (`#DIV/0!`).
pub fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Absent,
        Data::Int(v) => Value::Number(*v as f64),
        Data::Float(v) => Value::Number(*v),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => Value::Text(s.clone()),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map_or_else(|| Value::Text(cell.to_string()), Value::Date),
        Data::DateTimeIso(s) => sheetwise_model::value::parse_date(s)
            .map_or_else(|| Value::Text(s.clone()), Value::Date),
        other => Value::Text(other.to_string()),
    }
}

fn excel_serial_to_date(serial: f64) -> Option<chrono::NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor() as i64 - EXCEL_UNIX_EPOCH_DAYS;
    chrono::DateTime::from_timestamp(days.checked_mul(86_400)?, 0).map(|dt| dt.date_naive())
}
