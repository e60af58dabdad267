use thiserror::Error;

/// Errors raised while building or configuring model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Column names must be unique within a dataset.
    #[error("duplicate column name '{column}'")]
    DuplicateColumn { column: String },

    /// A referenced column does not exist in the dataset.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },

    /// Aggregation name not one of sum, avg, count, min, max.
    #[error("unknown aggregation '{value}' (expected sum, avg, count, min or max)")]
    UnknownAggregation { value: String },

    /// Missing-value strategy name not one of mean, remove.
    #[error("unknown missing-value strategy '{value}' (expected mean or remove)")]
    UnknownStrategy { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
