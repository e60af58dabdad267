//! CSV output for cleaned datasets.

use std::io::Write;
use std::path::Path;

use sheetwise_engine::Dataset;

use crate::error::{IngestError, Result};

/// Writes the dataset's header and rows to a CSV file.
///
/// Cells are rendered with their display form; missing cells are empty.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    let writer = ::csv::Writer::from_path(path).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(writer, dataset).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.row_count(),
        "wrote CSV"
    );
    Ok(())
}

/// Writes the dataset as CSV into any writer.
pub fn write_csv_to<W: Write>(writer: W, dataset: &Dataset) -> std::result::Result<(), ::csv::Error> {
    write_records(::csv::Writer::from_writer(writer), dataset)
}

fn write_records<W: Write>(
    mut writer: ::csv::Writer<W>,
    dataset: &Dataset,
) -> std::result::Result<(), ::csv::Error> {
    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(dataset.columns().iter().map(|column| row.get(column).to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
