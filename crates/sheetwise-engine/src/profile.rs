//! Column profiling and type inference.
//!
//! Type precedence over the non-missing cells of a column:
//! 1. every cell parses as a finite number -> `number`
//! 2. every cell parses as a calendar date -> `date`
//! 3. every cell reads `true`/`false` -> `boolean`
//! 4. cells carry more than one native scalar kind -> `mixed`
//! 5. otherwise -> `string` (also the default for an all-missing column)

use std::collections::{BTreeSet, HashSet};

use sheetwise_model::{ColumnProfile, ColumnType, EngineOptions, Row, Value};

/// Lower-cased column names treated as geographic fields.
pub const GEO_COLUMN_NAMES: &[&str] = &[
    "lat",
    "lon",
    "latitude",
    "longitude",
    "city",
    "country",
    "state",
];

/// Profile every column, in column order.
pub fn profile_columns(
    rows: &[Row],
    columns: &[String],
    options: &EngineOptions,
) -> Vec<ColumnProfile> {
    let profile: Vec<ColumnProfile> = columns
        .iter()
        .map(|column| profile_column(rows, column, options))
        .collect();
    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        "profiled columns"
    );
    profile
}

/// Profile a single column.
pub fn profile_column(rows: &[Row], column: &str, options: &EngineOptions) -> ColumnProfile {
    let present: Vec<&Value> = rows
        .iter()
        .map(|row| row.get(column))
        .filter(|value| !value.is_missing())
        .collect();

    let unique_count = present
        .iter()
        .map(|value| value.signature())
        .collect::<HashSet<_>>()
        .len();

    ColumnProfile {
        name: column.to_string(),
        column_type: infer_column_type(&present),
        missing_count: rows.len() - present.len(),
        unique_count,
        sample: present
            .iter()
            .take(options.sample_size)
            .map(|value| (*value).clone())
            .collect(),
        is_geo: is_geo_column(column),
    }
}

/// Infer a column type from its non-missing cells.
pub fn infer_column_type(values: &[&Value]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::String;
    }
    if values.iter().all(|value| value.as_number().is_some()) {
        return ColumnType::Number;
    }
    if values.iter().all(|value| value.as_date().is_some()) {
        return ColumnType::Date;
    }
    if values.iter().all(|value| value.as_bool().is_some()) {
        return ColumnType::Boolean;
    }
    let kinds: BTreeSet<&str> = values.iter().map(|value| value.kind_name()).collect();
    if kinds.len() > 1 {
        ColumnType::Mixed
    } else {
        ColumnType::String
    }
}

/// Returns true when the column name is a known geographic field.
pub fn is_geo_column(name: &str) -> bool {
    let lower = name.trim().to_lowercase();
    GEO_COLUMN_NAMES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(column: &str, values: Vec<Value>) -> Vec<Row> {
        values
            .into_iter()
            .map(|value| [(column, value)].into_iter().collect())
            .collect()
    }

    fn infer(values: Vec<Value>) -> ColumnType {
        let refs: Vec<&Value> = values.iter().collect();
        infer_column_type(&refs)
    }

    #[test]
    fn numeric_text_is_number() {
        assert_eq!(
            infer(vec!["1".into(), "2".into(), "3".into()]),
            ColumnType::Number
        );
    }

    #[test]
    fn iso_dates_are_date() {
        assert_eq!(
            infer(vec!["2024-01-01".into(), "2024-02-01".into()]),
            ColumnType::Date
        );
    }

    #[test]
    fn text_with_a_number_is_string() {
        assert_eq!(
            infer(vec!["a".into(), "b".into(), "1".into()]),
            ColumnType::String
        );
    }

    #[test]
    fn true_false_is_boolean() {
        assert_eq!(
            infer(vec![Value::Bool(true), "false".into(), "TRUE".into()]),
            ColumnType::Boolean
        );
    }

    #[test]
    fn heterogeneous_native_kinds_are_mixed() {
        assert_eq!(
            infer(vec![Value::Number(1.0), "north".into()]),
            ColumnType::Mixed
        );
        assert_eq!(
            infer(vec![Value::Bool(true), "maybe".into()]),
            ColumnType::Mixed
        );
    }

    #[test]
    fn native_numbers_with_numeric_text_stay_number() {
        assert_eq!(
            infer(vec![Value::Number(1.0), "2.5".into()]),
            ColumnType::Number
        );
    }

    #[test]
    fn all_missing_column_defaults_to_string() {
        let data = rows("x", vec![Value::Absent, "".into(), Value::Absent]);
        let profile = profile_column(&data, "x", &EngineOptions::default());
        assert_eq!(profile.column_type, ColumnType::String);
        assert_eq!(profile.missing_count, 3);
        assert_eq!(profile.unique_count, 0);
        assert!(profile.sample.is_empty());
    }

    #[test]
    fn sample_keeps_first_five_in_order_with_repeats() {
        let data = rows(
            "x",
            vec![
                "a".into(),
                Value::Absent,
                "a".into(),
                "b".into(),
                "c".into(),
                "d".into(),
                "e".into(),
            ],
        );
        let profile = profile_column(&data, "x", &EngineOptions::default());
        let sample: Vec<String> = profile.sample.iter().map(ToString::to_string).collect();
        assert_eq!(sample, vec!["a", "a", "b", "c", "d"]);
        assert_eq!(profile.unique_count, 5);
        assert_eq!(profile.missing_count, 1);
    }

    #[test]
    fn unique_count_uses_value_equality() {
        let data = rows(
            "x",
            vec![
                Value::Number(1.0),
                Value::Number(1.0),
                "1".into(),
                "1".into(),
            ],
        );
        let profile = profile_column(&data, "x", &EngineOptions::default());
        assert_eq!(profile.unique_count, 2);
    }

    #[test]
    fn sample_size_is_configurable() {
        let data = rows("x", vec!["a".into(), "b".into(), "c".into()]);
        let options = EngineOptions::default().with_sample_size(2);
        let profile = profile_column(&data, "x", &options);
        assert_eq!(profile.sample.len(), 2);
    }

    #[test]
    fn geo_names_are_flagged() {
        assert!(is_geo_column("Latitude"));
        assert!(is_geo_column("country"));
        assert!(!is_geo_column("countryside"));
    }
}
