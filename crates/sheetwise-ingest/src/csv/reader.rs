//! CSV decoding into a dataset.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use sheetwise_engine::Dataset;
use sheetwise_model::{EngineOptions, Row};

use crate::error::{IngestError, Result};

use super::convert::any_to_value;
use super::decode::decode_to_utf8;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

fn read_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// File name used as the dataset name, falling back to the full path.
pub(crate) fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Reads a CSV file into a [`Dataset`].
///
/// The dataset is named after the file name.
pub fn read_csv_dataset(path: &Path, options: &EngineOptions) -> Result<Dataset> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
    read_csv_bytes(&file_display_name(path), &bytes, options)
}

/// Parses CSV content into a [`Dataset`].
///
/// The first line is the header and fixes the column set. Empty fields
/// become absent cells. Every other field arrives as text exactly as written;
/// typing is left to the profiler so `007` or `1.50` survive a write-back.
pub fn read_csv_bytes(name: &str, bytes: &[u8], options: &EngineOptions) -> Result<Dataset> {
    let (utf8, encoding) = decode_to_utf8(bytes);
    if utf8.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            name: name.to_string(),
        });
    }
    tracing::debug!(name, encoding, bytes = bytes.len(), "decoding CSV");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        // Zero rows of inference reads every column as String.
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(utf8.into_owned()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            name: name.to_string(),
            message: e.to_string(),
        })?;

    validate_dataframe_shape(&df, name)?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|column| column.to_string())
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Row::new();
        for column in df.get_columns() {
            let value = column.get(idx).map_or(sheetwise_model::Value::Absent, any_to_value);
            row.insert(column.name().to_string(), value);
        }
        rows.push(row);
    }

    tracing::info!(
        name,
        rows = rows.len(),
        columns = columns.len(),
        "loaded CSV"
    );
    Ok(Dataset::with_options(name, columns, rows, options.clone())?)
}

/// Validate DataFrame shape after loading.
///
/// Checks for:
/// - Missing header
/// - Empty DataFrame (no rows)
/// - Empty column names
/// - Warns about wide datasets (>500 columns)
fn validate_dataframe_shape(df: &DataFrame, name: &str) -> Result<()> {
    if df.width() == 0 {
        return Err(IngestError::NoHeaderDetected {
            name: name.to_string(),
        });
    }

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            name: name.to_string(),
        });
    }

    if df.width() > 500 {
        tracing::warn!(
            name,
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    for column in df.get_column_names() {
        if column.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
