use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of data-quality defect.
///
/// Only `Missing` and `Duplicate` are produced by the detector; `Outlier` and
/// `Format` are reserved for extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Missing,
    Duplicate,
    Outlier,
    Format,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "missing",
            Self::Duplicate => "duplicate",
            Self::Outlier => "outlier",
            Self::Format => "format",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// A detected data-quality defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIssue {
    /// Unique within a dataset (`missing-<column>`, `duplicates`).
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    /// Human-readable message.
    pub description: String,
    /// Column the issue applies to, if column-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Row indices; empty for column-level issues.
    pub affected_rows: Vec<usize>,
}
