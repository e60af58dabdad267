use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Statistic requested for a pivot value field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl Aggregation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Count => "count",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "avg" | "average" | "mean" => Ok(Self::Avg),
            "count" => Ok(Self::Count),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(ModelError::UnknownAggregation {
                value: s.to_string(),
            }),
        }
    }
}

/// A value column and the statistic to surface for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueField {
    pub field: String,
    pub agg: Aggregation,
}

/// Pivot table layout: grouping keys on both axes plus value fields.
///
/// Only the first entry of `values` is aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotConfig {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<ValueField>,
}

impl PivotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rows<I, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, agg: Aggregation) -> Self {
        self.values.push(ValueField {
            field: field.into(),
            agg,
        });
        self
    }

    /// The value field that gets aggregated.
    pub fn primary_value(&self) -> Option<&ValueField> {
        self.values.first()
    }

    /// True when both axes carry at least one grouping column.
    pub fn is_complete(&self) -> bool {
        !self.rows.is_empty() && !self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_parses_aliases() {
        assert_eq!("SUM".parse::<Aggregation>(), Ok(Aggregation::Sum));
        assert_eq!("mean".parse::<Aggregation>(), Ok(Aggregation::Avg));
        assert_eq!(" max ".parse::<Aggregation>(), Ok(Aggregation::Max));
        assert!(matches!(
            "median".parse::<Aggregation>(),
            Err(ModelError::UnknownAggregation { .. })
        ));
    }

    #[test]
    fn builder_keeps_first_value_as_primary() {
        let config = PivotConfig::new()
            .with_rows(["dept"])
            .with_value("amount", Aggregation::Sum)
            .with_value("qty", Aggregation::Max);
        assert_eq!(config.primary_value().map(|v| v.field.as_str()), Some("amount"));
        assert!(!config.is_complete());
    }
}
