//! Tabular data engine.
//!
//! Pure functions over a decoded rectangular table:
//!
//! - **profile**: per-column type inference and statistics
//! - **detect**: missing-value and duplicate-row issues
//! - **clean**: mean imputation, row removal and de-duplication
//! - **pivot**: grouped aggregation on row and column keys
//! - **health**: summary score shown next to the issue list
//!
//! Every operation takes its inputs by reference and returns new values.
//! A [`Dataset`] is never modified after construction; cleaning returns a
//! fresh one with its profile and issues recomputed.

pub mod clean;
pub mod dataset;
pub mod detect;
pub mod error;
pub mod health;
pub mod pivot;
pub mod profile;

pub use clean::{clean_missing_values, column_mean, remove_duplicates, resolve_all_issues};
pub use dataset::Dataset;
pub use detect::{detect_issues, duplicate_row_indices};
pub use error::{CleaningError, Result};
pub use health::health_score;
pub use pivot::{PivotCell, PivotTable, TOTAL_KEY, VALUE_KEY, pivot, pivot_dataset};
pub use profile::{infer_column_type, is_geo_column, profile_column, profile_columns};

pub use sheetwise_model as model;
