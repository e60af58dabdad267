//! Core types for the sheetwise tabular data engine.
//!
//! Everything here is plain data: scalar cell values, rows, column profiles,
//! data-quality issues, pivot configuration and engine options. The engine
//! crate computes these; presentation layers consume them (optionally as JSON).

pub mod error;
pub mod issue;
pub mod options;
pub mod pivot;
pub mod profile;
pub mod value;

pub use error::{ModelError, Result};
pub use issue::{DataIssue, IssueKind, IssueSeverity};
pub use options::{EngineOptions, MissingStrategy};
pub use pivot::{Aggregation, PivotConfig, ValueField};
pub use profile::{ColumnProfile, ColumnType};
pub use value::{OrderedRow, Row, Value};
