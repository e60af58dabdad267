//! Pivot aggregation.
//!
//! Rows are grouped by a row key and a column key. Each bucket keeps the raw
//! statistics of the first configured value field; the configured
//! aggregation picks which statistic [`PivotTable::value`] surfaces.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use sheetwise_model::{Aggregation, EngineOptions, ModelError, PivotConfig, Row};

use crate::dataset::Dataset;

/// Row key used when no row grouping columns are configured.
pub const TOTAL_KEY: &str = "Total";

/// Column key used when no column grouping columns are configured.
pub const VALUE_KEY: &str = "Value";

/// Statistics for one (row key, column key) bucket.
///
/// `min` starts at +infinity and `max` at -infinity, so a bucket without any
/// numeric value keeps those bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotCell {
    /// Rows in the bucket, numeric or not.
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    /// Numeric values in row order.
    pub values: Vec<f64>,
}

impl Default for PivotCell {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            values: Vec::new(),
        }
    }
}

impl PivotCell {
    /// Count the row and fold in its value when numeric.
    pub fn record(&mut self, value: Option<f64>) {
        self.count += 1;
        if let Some(value) = value {
            self.sum += value;
            self.min = self.min.min(value);
            self.max = self.max.max(value);
            self.values.push(value);
        }
    }

    /// Mean of the numeric values, `None` when there are none.
    pub fn average(&self) -> Option<f64> {
        (!self.values.is_empty()).then(|| self.sum / self.values.len() as f64)
    }

    /// The statistic selected by `agg`.
    ///
    /// `min`, `max` and `avg` are `None` for a bucket without numeric values.
    pub fn aggregate(&self, agg: Aggregation) -> Option<f64> {
        let has_values = !self.values.is_empty();
        match agg {
            Aggregation::Sum => Some(self.sum),
            Aggregation::Count => Some(self.count as f64),
            Aggregation::Avg => self.average(),
            Aggregation::Min => has_values.then_some(self.min),
            Aggregation::Max => has_values.then_some(self.max),
        }
    }
}

/// Nested mapping row key -> column key -> cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PivotTable {
    aggregation: Option<Aggregation>,
    cells: BTreeMap<String, BTreeMap<String, PivotCell>>,
}

impl PivotTable {
    /// The aggregation requested by the config, if a value field was given.
    pub fn aggregation(&self) -> Option<Aggregation> {
        self.aggregation
    }

    /// Row keys in sorted order.
    pub fn row_keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Union of column keys across all rows, sorted.
    pub fn column_keys(&self) -> Vec<&str> {
        self.cells
            .values()
            .flat_map(BTreeMap::keys)
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn row(&self, row_key: &str) -> Option<&BTreeMap<String, PivotCell>> {
        self.cells.get(row_key)
    }

    pub fn cell(&self, row_key: &str, col_key: &str) -> Option<&PivotCell> {
        self.cells.get(row_key)?.get(col_key)
    }

    /// Requested statistic for a bucket; the row count without a value field.
    pub fn value(&self, row_key: &str, col_key: &str) -> Option<f64> {
        let cell = self.cell(row_key, col_key)?;
        match self.aggregation {
            Some(agg) => cell.aggregate(agg),
            None => Some(cell.count as f64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The raw nested mapping.
    pub fn cells(&self) -> &BTreeMap<String, BTreeMap<String, PivotCell>> {
        &self.cells
    }
}

/// Group `rows` by the configured keys and aggregate the first value field.
///
/// Empty key lists collapse to [`TOTAL_KEY`] / [`VALUE_KEY`]. A key whose
/// components all render empty falls back the same way. Non-numeric or
/// missing values count toward `count` only.
pub fn pivot(rows: &[Row], config: &PivotConfig, options: &EngineOptions) -> PivotTable {
    let value_field = config.primary_value();
    if config.values.len() > 1 {
        tracing::debug!(
            ignored = config.values.len() - 1,
            "only the first value field is aggregated"
        );
    }

    let mut cells: BTreeMap<String, BTreeMap<String, PivotCell>> = BTreeMap::new();
    for row in rows {
        let row_key = group_key(row, &config.rows, &options.key_separator, TOTAL_KEY);
        let col_key = group_key(row, &config.columns, &options.key_separator, VALUE_KEY);
        let value = value_field.and_then(|field| row.get(&field.field).as_number());
        cells
            .entry(row_key)
            .or_default()
            .entry(col_key)
            .or_default()
            .record(value);
    }

    tracing::debug!(
        rows = rows.len(),
        row_keys = cells.len(),
        "built pivot table"
    );
    PivotTable {
        aggregation: value_field.map(|field| field.agg),
        cells,
    }
}

/// Pivot a dataset after checking every referenced column exists.
///
/// # Errors
///
/// Returns [`ModelError::UnknownColumn`] for the first unknown column.
pub fn pivot_dataset(dataset: &Dataset, config: &PivotConfig) -> Result<PivotTable, ModelError> {
    let referenced = config
        .rows
        .iter()
        .chain(&config.columns)
        .chain(config.values.iter().map(|value| &value.field));
    for column in referenced {
        if !dataset.has_column(column) {
            return Err(ModelError::UnknownColumn {
                column: column.clone(),
            });
        }
    }
    Ok(pivot(dataset.rows(), config, dataset.options()))
}

fn group_key(row: &Row, columns: &[String], separator: &str, fallback: &str) -> String {
    let key = columns
        .iter()
        .map(|column| row.get(column).to_string())
        .collect::<Vec<_>>()
        .join(separator);
    if key.is_empty() {
        fallback.to_string()
    } else {
        key
    }
}
