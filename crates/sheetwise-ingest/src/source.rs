//! File-extension dispatch between the CSV and workbook readers.

use std::path::Path;

use sheetwise_engine::Dataset;
use sheetwise_model::EngineOptions;

use crate::csv::read_csv_dataset;
use crate::error::Result;
use crate::xlsx::read_workbook_dataset;

/// Extensions decoded as spreadsheet workbooks.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// How a table file is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Format implied by the file extension; anything unrecognised is CSV.
    pub fn from_path(path: &Path) -> Self {
        let is_workbook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                WORKBOOK_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if is_workbook { Self::Workbook } else { Self::Csv }
    }
}

/// Reads a CSV file or the first sheet of a workbook into a [`Dataset`].
pub fn read_dataset(path: &Path, options: &EngineOptions) -> Result<Dataset> {
    match SourceFormat::from_path(path) {
        SourceFormat::Csv => read_csv_dataset(path, options),
        SourceFormat::Workbook => read_workbook_dataset(path, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("a.csv")), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path(Path::new("a.XLSX")), SourceFormat::Workbook);
        assert_eq!(SourceFormat::from_path(Path::new("a.xls")), SourceFormat::Workbook);
        assert_eq!(SourceFormat::from_path(Path::new("data")), SourceFormat::Csv);
    }

    #[test]
    fn test_read_dataset_dispatches_to_workbook() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sales.xlsx");
        let dataset = read_dataset(&path, &EngineOptions::default()).unwrap();

        assert_eq!(dataset.column_count(), 4);
    }
}
