//! Error types for file decoding.

use std::path::PathBuf;
use thiserror::Error;

use sheetwise_model::ModelError;

/// Errors that can occur while reading or writing table files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {name}: {message}")]
    CsvParse { name: String, message: String },

    /// CSV has a header but no data rows, or no content at all.
    #[error("no data found in {name}")]
    EmptyCsv { name: String },

    /// No usable header row.
    #[error("could not detect header row in {name}")]
    NoHeaderDetected { name: String },

    /// A header cell is blank.
    #[error("empty column name in {name}")]
    EmptyColumnName { name: String },

    /// Header cannot form a dataset.
    #[error(transparent)]
    Model(#[from] ModelError),

    // === Workbook Errors ===
    /// Workbook could not be opened or its sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheet.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    // === Output Errors ===
    /// Failed to write CSV output.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
