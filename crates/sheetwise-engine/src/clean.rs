//! Cleaning transforms.
//!
//! Each transform reads a [`Dataset`] and returns a new one whose profile and
//! issues are recomputed from the rewritten rows. Columns never change.

use std::collections::HashSet;

use sheetwise_model::{ColumnType, IssueKind, MissingStrategy, Row, Value};

use crate::dataset::Dataset;
use crate::error::{CleaningError, Result};

/// Arithmetic mean of the cells in `column` that parse as finite numbers.
///
/// Missing and non-numeric cells are ignored. Returns `None` when no cell
/// is numeric.
pub fn column_mean(rows: &[Row], column: &str) -> Option<f64> {
    let (sum, count) = rows
        .iter()
        .filter_map(|row| row.get(column).as_number())
        .fold((0.0_f64, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Repair missing cells in one column.
///
/// - [`MissingStrategy::Mean`] writes the column mean into every missing
///   cell and leaves all other cells untouched. When the column has no
///   numeric cells the mean is NaN and NaN is written; callers that want to
///   refuse that case check [`column_mean`] first and raise
///   [`CleaningError::NoNumericBasis`].
/// - [`MissingStrategy::Remove`] drops every row where the column is missing.
///
/// # Errors
///
/// Returns [`CleaningError::UnknownColumn`] if the column is not in the dataset.
pub fn clean_missing_values(
    dataset: &Dataset,
    column: &str,
    strategy: MissingStrategy,
) -> Result<Dataset> {
    if !dataset.has_column(column) {
        return Err(CleaningError::UnknownColumn {
            column: column.to_string(),
        });
    }

    let rows: Vec<Row> = match strategy {
        MissingStrategy::Remove => dataset
            .rows()
            .iter()
            .filter(|row| !row.get(column).is_missing())
            .cloned()
            .collect(),
        MissingStrategy::Mean => {
            let mean = column_mean(dataset.rows(), column).unwrap_or_else(|| {
                tracing::warn!(column, "no numeric values; imputing NaN");
                f64::NAN
            });
            dataset
                .rows()
                .iter()
                .map(|row| {
                    if row.get(column).is_missing() {
                        row.with(column, Value::Number(mean))
                    } else {
                        row.clone()
                    }
                })
                .collect()
        }
    };

    tracing::debug!(
        column,
        strategy = %strategy,
        rows_before = dataset.row_count(),
        rows_after = rows.len(),
        "cleaned missing values"
    );
    Ok(dataset.with_rows(rows))
}

/// Keep the first occurrence of every row signature, in original order.
pub fn remove_duplicates(dataset: &Dataset) -> Dataset {
    let mut seen = HashSet::with_capacity(dataset.row_count());
    let rows: Vec<Row> = dataset
        .rows()
        .iter()
        .filter(|row| seen.insert(row.signature(dataset.columns())))
        .cloned()
        .collect();
    tracing::debug!(
        removed = dataset.row_count() - rows.len(),
        "removed duplicate rows"
    );
    dataset.with_rows(rows)
}

/// Address every detected missing-value and duplicate issue.
///
/// Number columns are mean-imputed, other columns lose their incomplete
/// rows, and duplicates are removed last. The result has no `missing` or
/// `duplicate` issues.
///
/// # Errors
///
/// Propagates [`CleaningError`] from the individual transforms.
pub fn resolve_all_issues(dataset: &Dataset) -> Result<Dataset> {
    let mut current = dataset.clone();
    let missing: Vec<String> = dataset
        .issues_of(IssueKind::Missing)
        .filter_map(|issue| issue.column.clone())
        .collect();

    for column in missing {
        let strategy = match current.column_profile(&column) {
            Some(profile)
                if profile.column_type == ColumnType::Number
                    && column_mean(current.rows(), &column).is_some() =>
            {
                MissingStrategy::Mean
            }
            _ => MissingStrategy::Remove,
        };
        current = clean_missing_values(&current, &column, strategy)?;
    }

    if current.issues_of(IssueKind::Duplicate).next().is_some() {
        current = remove_duplicates(&current);
    }
    Ok(current)
}
