//! Tests for cleaning transforms.

use proptest::prelude::*;
use sheetwise_engine::model::{IssueKind, MissingStrategy, Row, Value};
use sheetwise_engine::{
    Dataset, clean_missing_values, remove_duplicates, resolve_all_issues,
};

fn sales() -> Dataset {
    Dataset::from_records(
        "sales.csv",
        vec![
            vec![("region", Value::from("north")), ("amount", Value::from(10.0))],
            vec![("region", Value::from("south")), ("amount", Value::Absent)],
            vec![("region", Value::from("north")), ("amount", Value::from(10.0))],
            vec![("region", Value::from("")), ("amount", Value::from("30"))],
            vec![("region", Value::from("east")), ("amount", Value::from("n/a"))],
        ],
    )
    .expect("valid records")
}

#[test]
fn mean_imputation_fills_only_missing_cells() {
    let data = sales();
    let cleaned = clean_missing_values(&data, "amount", MissingStrategy::Mean).expect("column");

    assert_eq!(cleaned.row_count(), data.row_count());
    // mean of 10, 10 and 30
    let expected = 50.0 / 3.0;
    assert_eq!(cleaned.rows()[1].get("amount"), &Value::Number(expected));
    assert_eq!(cleaned.rows()[3].get("amount"), &Value::from("30"));
    assert_eq!(cleaned.rows()[4].get("amount"), &Value::from("n/a"));
    let profile = cleaned.column_profile("amount").expect("profile");
    assert_eq!(profile.missing_count, 0);
}

#[test]
fn mean_imputation_is_a_no_op_the_second_time() {
    let once = clean_missing_values(&sales(), "amount", MissingStrategy::Mean).expect("column");
    let twice = clean_missing_values(&once, "amount", MissingStrategy::Mean).expect("column");
    assert_eq!(once.rows(), twice.rows());
}

#[test]
fn remove_strategy_drops_incomplete_rows() {
    let cleaned =
        clean_missing_values(&sales(), "region", MissingStrategy::Remove).expect("column");
    assert_eq!(cleaned.row_count(), 4);
    assert!(cleaned
        .rows()
        .iter()
        .all(|row| !row.get("region").is_missing()));
    assert!(cleaned.issues().iter().all(|issue| issue.id != "missing-region"));
}

#[test]
fn cleaning_recomputes_issues() {
    let data = sales();
    assert!(data.issues().iter().any(|issue| issue.id == "missing-amount"));
    let cleaned = clean_missing_values(&data, "amount", MissingStrategy::Mean).expect("column");
    assert!(cleaned.issues().iter().all(|issue| issue.id != "missing-amount"));
    assert_eq!(cleaned.columns(), data.columns());
}

#[test]
fn duplicate_removal_keeps_first_occurrence() {
    let data = sales();
    assert_eq!(data.issues_of(IssueKind::Duplicate).count(), 1);
    let deduped = remove_duplicates(&data);
    assert_eq!(deduped.row_count(), 4);
    assert_eq!(deduped.rows()[0], data.rows()[0]);
    assert_eq!(deduped.rows()[1], data.rows()[1]);
    assert_eq!(deduped.issues_of(IssueKind::Duplicate).count(), 0);
}

#[test]
fn transforms_leave_their_input_unchanged() {
    let data = sales();
    let before = data.clone();

    let _ = clean_missing_values(&data, "region", MissingStrategy::Remove).expect("column");
    assert_eq!(data, before);

    let _ = remove_duplicates(&data);
    assert_eq!(data, before);

    let _ = resolve_all_issues(&data).expect("resolve");
    assert_eq!(data, before);
    assert_eq!(data.row_count(), 5);
    assert_eq!(data.issues_of(IssueKind::Duplicate).count(), 1);
}

#[test]
fn duplicate_removal_is_idempotent() {
    let once = remove_duplicates(&sales());
    let twice = remove_duplicates(&once);
    assert_eq!(once, twice);
}

#[test]
fn resolving_all_issues_leaves_no_issues() {
    let data = sales();
    assert!(!data.is_clean());
    let cleaned = resolve_all_issues(&data).expect("clean");
    assert!(cleaned.is_clean(), "issues left: {:?}", cleaned.issues());
}

#[test]
fn resolving_all_issues_on_numeric_column_imputes() {
    let data = Dataset::from_records(
        "scores",
        vec![
            vec![("score", Value::from(1.0))],
            vec![("score", Value::Absent)],
            vec![("score", Value::from(3.0))],
        ],
    )
    .expect("valid records");
    let cleaned = resolve_all_issues(&data).expect("clean");
    assert_eq!(cleaned.row_count(), 3);
    assert_eq!(cleaned.rows()[1].get("score"), &Value::Number(2.0));
}

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        (0i64..4).prop_map(Value::from),
        "[xy]".prop_map(Value::Text),
    ]
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec((cell(), cell()), 0..30).prop_map(|cells| {
        let rows: Vec<Row> = cells
            .into_iter()
            .map(|(a, b)| [("a", a), ("b", b)].into_iter().collect())
            .collect();
        Dataset::new("generated", vec!["a".to_string(), "b".to_string()], rows)
            .expect("unique columns")
    })
}

proptest! {
    #[test]
    fn dedupe_twice_equals_dedupe_once(data in dataset()) {
        let once = remove_duplicates(&data);
        prop_assert_eq!(once.issues_of(IssueKind::Duplicate).count(), 0);
        prop_assert_eq!(remove_duplicates(&once), once);
    }

    #[test]
    fn resolve_all_round_trip_is_clean(data in dataset()) {
        let cleaned = resolve_all_issues(&data).expect("known columns");
        prop_assert!(cleaned.is_clean());
    }
}
