use thiserror::Error;

/// Errors raised by cleaning transforms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CleaningError {
    /// The column is not part of the dataset.
    #[error("column '{column}' not found in dataset")]
    UnknownColumn { column: String },

    /// Mean imputation requested for a column without numeric values.
    #[error("column '{column}' has no numeric values to compute a mean from")]
    NoNumericBasis { column: String },
}

pub type Result<T> = std::result::Result<T, CleaningError>;
