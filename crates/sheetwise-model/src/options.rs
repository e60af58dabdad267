//! Configuration options for the data engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default number of sample values kept per column profile.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Default missing ratio above which a missing-value issue is high severity.
pub const DEFAULT_HIGH_MISSING_RATIO: f64 = 0.1;

/// Default separator joining multi-column pivot keys.
pub const DEFAULT_KEY_SEPARATOR: &str = " - ";

/// Options shared by profiling, detection and pivoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Number of non-missing values kept in each profile sample.
    pub sample_size: usize,

    /// A column whose missing count is strictly greater than
    /// `high_missing_ratio * row_count` gets a high severity issue.
    pub high_missing_ratio: f64,

    /// Separator used when joining pivot key components.
    pub key_separator: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            high_missing_ratio: DEFAULT_HIGH_MISSING_RATIO,
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    #[must_use]
    pub fn with_high_missing_ratio(mut self, ratio: f64) -> Self {
        self.high_missing_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_key_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_separator = separator.into();
        self
    }
}

/// How missing cells in a column are repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingStrategy {
    /// Replace missing cells with the column's numeric mean.
    Mean,
    /// Drop every row where the column is missing.
    Remove,
}

impl fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mean => "mean",
            Self::Remove => "remove",
        })
    }
}

impl FromStr for MissingStrategy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "remove" | "drop" => Ok(Self::Remove),
            _ => Err(ModelError::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}
