//! Command implementations, independent of argument parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sheetwise_engine::{
    CleaningError, Dataset, PivotTable, clean_missing_values, column_mean, pivot_dataset,
    remove_duplicates, resolve_all_issues,
};
use sheetwise_ingest::{read_dataset, write_csv};
use sheetwise_model::{Aggregation, EngineOptions, MissingStrategy, PivotConfig};

/// Which transforms `clean` applies, in order: mean fills, row drops, dedupe.
#[derive(Debug, Clone, Default)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub fill_mean: Vec<String>,
    pub drop_missing: Vec<String>,
    pub dedupe: bool,
    pub all: bool,
    pub output: Option<PathBuf>,
}

/// Datasets before and after cleaning, plus what was done.
#[derive(Debug)]
pub struct CleanOutcome {
    pub before: Dataset,
    pub after: Dataset,
    pub steps: Vec<String>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct PivotRequest {
    pub input: PathBuf,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub value: String,
    pub agg: Aggregation,
}

impl PivotRequest {
    pub fn config(&self) -> PivotConfig {
        PivotConfig::new()
            .with_rows(self.rows.iter().cloned())
            .with_columns(self.columns.iter().cloned())
            .with_value(self.value.clone(), self.agg)
    }
}

/// Load a CSV file, or the first sheet of a workbook, as a dataset.
pub fn load_dataset(path: &Path, options: &EngineOptions) -> Result<Dataset> {
    read_dataset(path, options).with_context(|| format!("failed to parse {}", path.display()))
}

/// Mean-fill one column, refusing columns without any numeric value.
pub fn fill_mean(dataset: &Dataset, column: &str) -> Result<Dataset> {
    if !dataset.has_column(column) {
        return Err(CleaningError::UnknownColumn {
            column: column.to_string(),
        }
        .into());
    }
    if column_mean(dataset.rows(), column).is_none() {
        return Err(CleaningError::NoNumericBasis {
            column: column.to_string(),
        }
        .into());
    }
    Ok(clean_missing_values(dataset, column, MissingStrategy::Mean)?)
}

pub fn run_clean(request: &CleanRequest, options: &EngineOptions) -> Result<CleanOutcome> {
    let before = load_dataset(&request.input, options)?;
    let mut after = before.clone();
    let mut steps = Vec::new();

    if request.all {
        after = resolve_all_issues(&after)?;
        steps.push("resolved all detected issues".to_string());
    }
    for column in &request.fill_mean {
        after = fill_mean(&after, column)?;
        steps.push(format!("filled missing '{column}' with mean"));
    }
    for column in &request.drop_missing {
        after = clean_missing_values(&after, column, MissingStrategy::Remove)?;
        steps.push(format!("dropped rows missing '{column}'"));
    }
    if request.dedupe {
        after = remove_duplicates(&after);
        steps.push("removed duplicate rows".to_string());
    }

    if let Some(path) = &request.output {
        write_csv(path, &after)?;
    }
    tracing::info!(
        rows_before = before.row_count(),
        rows_after = after.row_count(),
        issues_before = before.issues().len(),
        issues_after = after.issues().len(),
        "clean finished"
    );

    Ok(CleanOutcome {
        before,
        after,
        steps,
        output: request.output.clone(),
    })
}

pub fn run_pivot(request: &PivotRequest, options: &EngineOptions) -> Result<(PivotConfig, PivotTable)> {
    let dataset = load_dataset(&request.input, options)?;
    let config = request.config();
    let table = pivot_dataset(&dataset, &config)?;
    Ok((config, table))
}
