use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Date,
    Boolean,
    /// Cells carry more than one native scalar kind.
    Mixed,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column type and statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub missing_count: usize,
    /// Distinct non-missing values under structural equality.
    pub unique_count: usize,
    /// First non-missing values in row order (not deduplicated).
    pub sample: Vec<Value>,
    /// Column name looks like a geographic field.
    pub is_geo: bool,
}

impl ColumnProfile {
    /// Number of non-missing cells given the dataset's row count.
    pub fn present_count(&self, row_count: usize) -> usize {
        row_count.saturating_sub(self.missing_count)
    }

    /// Share of missing cells, 0.0 for an empty dataset.
    pub fn missing_ratio(&self, row_count: usize) -> f64 {
        if row_count == 0 {
            0.0
        } else {
            self.missing_count as f64 / row_count as f64
        }
    }
}
