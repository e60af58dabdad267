//! Issue detection over profiled data.
//!
//! Output order is deterministic: one `missing` issue per affected column in
//! column order, then at most one `duplicate` issue.

use std::collections::HashSet;

use sheetwise_model::{
    ColumnProfile, DataIssue, EngineOptions, IssueKind, IssueSeverity, Row,
};

/// Identifier of the duplicate-rows issue.
pub const DUPLICATES_ISSUE_ID: &str = "duplicates";

/// Detect missing-value and duplicate-row issues.
///
/// The profile defines the column list used for row signatures.
pub fn detect_issues(
    rows: &[Row],
    profile: &[ColumnProfile],
    options: &EngineOptions,
) -> Vec<DataIssue> {
    let row_count = rows.len();
    let threshold = options.high_missing_ratio * row_count as f64;

    let mut issues: Vec<DataIssue> = profile
        .iter()
        .filter(|column| column.missing_count > 0)
        .map(|column| DataIssue {
            id: format!("missing-{}", column.name),
            kind: IssueKind::Missing,
            severity: if column.missing_count as f64 > threshold {
                IssueSeverity::High
            } else {
                IssueSeverity::Medium
            },
            description: format!(
                "Column '{}' has {} missing values.",
                column.name, column.missing_count
            ),
            column: Some(column.name.clone()),
            affected_rows: Vec::new(),
        })
        .collect();

    let columns: Vec<String> = profile.iter().map(|column| column.name.clone()).collect();
    let duplicates = duplicate_row_indices(rows, &columns);
    if !duplicates.is_empty() {
        issues.push(DataIssue {
            id: DUPLICATES_ISSUE_ID.to_string(),
            kind: IssueKind::Duplicate,
            severity: IssueSeverity::Medium,
            description: format!("Found {} duplicate rows.", duplicates.len()),
            column: None,
            affected_rows: duplicates,
        });
    }

    tracing::debug!(rows = row_count, issues = issues.len(), "detected issues");
    issues
}

/// Indices of rows whose signature was already seen earlier in the table.
///
/// The first occurrence of each signature is never reported.
pub fn duplicate_row_indices(rows: &[Row], columns: &[String]) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| (!seen.insert(row.signature(columns))).then_some(idx))
        .collect()
}
