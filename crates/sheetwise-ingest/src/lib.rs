//! File decoding for the sheetwise engine.
//!
//! The engine works on decoded rows only. This crate turns CSV files and the
//! first sheet of spreadsheet workbooks into a
//! [`Dataset`](sheetwise_engine::Dataset) and writes cleaned datasets back
//! as CSV.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sheetwise_ingest::{read_dataset, write_csv};
//! use sheetwise_model::EngineOptions;
//!
//! let dataset = read_dataset(Path::new("sales.xlsx"), &EngineOptions::default())?;
//! let cleaned = sheetwise_engine::remove_duplicates(&dataset);
//! write_csv(Path::new("sales.clean.csv"), &cleaned)?;
//! ```

mod csv;
mod error;
mod source;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use crate::csv::{
    MAX_CSV_FILE_SIZE, any_to_value, check_file_size, check_file_size_with_limit,
    decode_to_utf8, read_csv_bytes, read_csv_dataset, write_csv, write_csv_to,
};

// === Workbook Reading ===
pub use xlsx::{cell_to_value, read_workbook_dataset};

// === Format Dispatch ===
pub use source::{SourceFormat, WORKBOOK_EXTENSIONS, read_dataset};
