//! The dataset value: rows plus their derived profile and issues.

use std::collections::HashSet;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use sheetwise_model::{
    ColumnProfile, DataIssue, EngineOptions, IssueKind, ModelError, Row, Value,
};

use crate::detect::detect_issues;
use crate::profile::profile_columns;

/// A table together with its column profile and detected issues.
///
/// Fields are private and every constructor derives `profile` and `issues`
/// from `rows`, so the derived data always matches the rows. Cleaning
/// operations return a new `Dataset` instead of changing this one.
///
/// Serialized rows list their cells in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
    profile: Vec<ColumnProfile>,
    issues: Vec<DataIssue>,
    options: EngineOptions,
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Dataset", 5)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field(
            "rows",
            &RowsInColumnOrder {
                rows: &self.rows,
                columns: &self.columns,
            },
        )?;
        state.serialize_field("profile", &self.profile)?;
        state.serialize_field("issues", &self.issues)?;
        state.end()
    }
}

struct RowsInColumnOrder<'a> {
    rows: &'a [Row],
    columns: &'a [String],
}

impl Serialize for RowsInColumnOrder<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in self.rows {
            seq.serialize_element(&row.ordered(self.columns))?;
        }
        seq.end()
    }
}

impl Dataset {
    /// Build a dataset with default engine options.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateColumn`] if a column name repeats.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Row>,
    ) -> Result<Self, ModelError> {
        Self::with_options(name, columns, rows, EngineOptions::default())
    }

    /// Build a dataset using the given engine options.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateColumn`] if a column name repeats.
    pub fn with_options(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Row>,
        options: EngineOptions,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(Self::derive(name.into(), columns, rows, options))
    }

    /// Build a dataset from decoded records.
    ///
    /// The column set is the key list of the first record, in order. Later
    /// records may omit keys; those cells read as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateColumn`] if the first record repeats a key.
    pub fn from_records<I, R, K, V>(name: impl Into<String>, records: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut columns = Vec::new();
        let mut rows = Vec::new();
        for (idx, record) in records.into_iter().enumerate() {
            let cells: Vec<(String, Value)> = record
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect();
            if idx == 0 {
                columns = cells.iter().map(|(key, _)| key.clone()).collect();
            }
            rows.push(cells.into_iter().collect());
        }
        Self::new(name, columns, rows)
    }

    /// Same name, columns and options, new rows; profile and issues recomputed.
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self::derive(
            self.name.clone(),
            self.columns.clone(),
            rows,
            self.options.clone(),
        )
    }

    fn derive(name: String, columns: Vec<String>, rows: Vec<Row>, options: EngineOptions) -> Self {
        let profile = profile_columns(&rows, &columns, &options);
        let issues = detect_issues(&rows, &profile, &options);
        Self {
            name,
            columns,
            rows,
            profile,
            issues,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn profile(&self) -> &[ColumnProfile] {
        &self.profile
    }

    pub fn issues(&self) -> &[DataIssue] {
        &self.issues
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Profile of the named column.
    pub fn column_profile(&self, column: &str) -> Option<&ColumnProfile> {
        self.profile.iter().find(|profile| profile.name == column)
    }

    /// Issues of one kind, in detection order.
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &DataIssue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Consume the dataset and return its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
