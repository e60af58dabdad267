//! Tests for column profiling.

use proptest::prelude::*;
use sheetwise_engine::model::{ColumnType, EngineOptions, Row, Value};
use sheetwise_engine::profile_columns;

fn single_column(values: &[&str]) -> Vec<Row> {
    values
        .iter()
        .map(|value| [("col", Value::from(*value))].into_iter().collect())
        .collect()
}

fn column_type(values: &[&str]) -> ColumnType {
    let rows = single_column(values);
    profile_columns(&rows, &["col".to_string()], &EngineOptions::default())[0].column_type
}

#[test]
fn type_precedence() {
    assert_eq!(column_type(&["1", "2", "3"]), ColumnType::Number);
    assert_eq!(column_type(&["2024-01-01", "2024-02-01"]), ColumnType::Date);
    assert_eq!(column_type(&["a", "b", "1"]), ColumnType::String);
    assert_eq!(column_type(&["true", "False"]), ColumnType::Boolean);
}

#[test]
fn missing_cells_do_not_affect_inference() {
    assert_eq!(column_type(&["1", "", "2"]), ColumnType::Number);
    assert_eq!(column_type(&["", ""]), ColumnType::String);
}

#[test]
fn profile_is_order_preserving() {
    let rows: Vec<Row> = vec![
        [("b", Value::from("x")), ("a", Value::from(1.0))]
            .into_iter()
            .collect(),
    ];
    let columns = vec!["b".to_string(), "a".to_string()];
    let profile = profile_columns(&rows, &columns, &EngineOptions::default());
    let names: Vec<&str> = profile.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        Just(Value::from("")),
        "[a-c]{1,2}".prop_map(Value::Text),
        (-100i64..100).prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn table() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((cell(), cell()), 0..40).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(a, b)| [("a", a), ("b", b)].into_iter().collect())
            .collect()
    })
}

proptest! {
    #[test]
    fn profiling_is_deterministic(rows in table()) {
        let columns = vec!["a".to_string(), "b".to_string()];
        let options = EngineOptions::default();
        prop_assert_eq!(
            profile_columns(&rows, &columns, &options),
            profile_columns(&rows, &columns, &options)
        );
    }

    #[test]
    fn missing_count_is_conserved(rows in table()) {
        let columns = vec!["a".to_string(), "b".to_string()];
        for profile in profile_columns(&rows, &columns, &EngineOptions::default()) {
            let present = rows
                .iter()
                .filter(|row| !row.get(&profile.name).is_missing())
                .count();
            prop_assert_eq!(profile.missing_count + present, rows.len());
            prop_assert!(profile.unique_count <= present);
            prop_assert!(profile.sample.len() <= 5);
        }
    }
}
