//! Tests for pivot aggregation.

use sheetwise_engine::model::{Aggregation, EngineOptions, ModelError, PivotConfig, Row, Value};
use sheetwise_engine::{Dataset, PivotCell, VALUE_KEY, pivot, pivot_dataset};

fn dept_rows() -> Vec<Row> {
    vec![
        [("dept", Value::from("A")), ("amt", Value::from(10.0))]
            .into_iter()
            .collect(),
        [("dept", Value::from("A")), ("amt", Value::from(20.0))]
            .into_iter()
            .collect(),
        [("dept", Value::from("B")), ("amt", Value::from(5.0))]
            .into_iter()
            .collect(),
    ]
}

fn cell(count: usize, values: &[f64]) -> PivotCell {
    let mut cell = PivotCell::default();
    for value in values {
        cell.record(Some(*value));
    }
    for _ in values.len()..count {
        cell.record(None);
    }
    cell
}

#[test]
fn groups_by_row_key() {
    let config = PivotConfig::new()
        .with_rows(["dept"])
        .with_value("amt", Aggregation::Sum);
    let table = pivot(&dept_rows(), &config, &EngineOptions::default());

    assert_eq!(table.row_keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(table.column_keys(), vec![VALUE_KEY]);

    let a = table.cell("A", "Value").expect("A bucket");
    assert_eq!(a.count, 2);
    assert_eq!(a.sum, 30.0);
    assert_eq!(a.min, 10.0);
    assert_eq!(a.max, 20.0);
    assert_eq!(a, &cell(2, &[10.0, 20.0]));

    let b = table.cell("B", "Value").expect("B bucket");
    assert_eq!(b, &cell(1, &[5.0]));
}

#[test]
fn agg_selects_statistic() {
    let rows = dept_rows();
    let options = EngineOptions::default();
    let expect = |agg: Aggregation, value: f64| {
        let config = PivotConfig::new()
            .with_rows(["dept"])
            .with_value("amt", agg);
        let table = pivot(&rows, &config, &options);
        assert_eq!(table.aggregation(), Some(agg));
        assert_eq!(table.value("A", "Value"), Some(value), "{agg}");
    };
    expect(Aggregation::Sum, 30.0);
    expect(Aggregation::Avg, 15.0);
    expect(Aggregation::Count, 2.0);
    expect(Aggregation::Min, 10.0);
    expect(Aggregation::Max, 20.0);
}

#[test]
fn non_numeric_values_only_count() {
    let mut rows = dept_rows();
    rows.push(
        [("dept", Value::from("B")), ("amt", Value::from("n/a"))]
            .into_iter()
            .collect(),
    );
    rows.push([("dept", Value::from("C"))].into_iter().collect());
    let config = PivotConfig::new()
        .with_rows(["dept"])
        .with_value("amt", Aggregation::Avg);
    let table = pivot(&rows, &config, &EngineOptions::default());

    let b = table.cell("B", "Value").expect("B bucket");
    assert_eq!(b.count, 2);
    assert_eq!(b.values, vec![5.0]);
    assert_eq!(table.value("B", "Value"), Some(5.0));

    let c = table.cell("C", "Value").expect("C bucket");
    assert_eq!(c.count, 1);
    assert_eq!(c.min, f64::INFINITY);
    assert_eq!(c.max, f64::NEG_INFINITY);
    assert_eq!(table.value("C", "Value"), None);
}

#[test]
fn cross_tab_with_both_axes() {
    let rows: Vec<Row> = vec![
        [("region", "north"), ("year", "2023"), ("sales", "1")]
            .into_iter()
            .collect(),
        [("region", "north"), ("year", "2024"), ("sales", "2")]
            .into_iter()
            .collect(),
        [("region", "south"), ("year", "2024"), ("sales", "4")]
            .into_iter()
            .collect(),
    ];
    let config = PivotConfig::new()
        .with_rows(["region"])
        .with_columns(["year"])
        .with_value("sales", Aggregation::Sum);
    let table = pivot(&rows, &config, &EngineOptions::default());

    assert_eq!(table.column_keys(), vec!["2023", "2024"]);
    assert_eq!(table.value("north", "2024"), Some(2.0));
    assert_eq!(table.value("south", "2024"), Some(4.0));
    assert!(table.cell("south", "2023").is_none());
}

#[test]
fn empty_axes_collapse_to_total() {
    let config = PivotConfig::new().with_value("amt", Aggregation::Sum);
    let table = pivot(&dept_rows(), &config, &EngineOptions::default());
    assert_eq!(table.len(), 1);
    assert_eq!(table.value("Total", "Value"), Some(35.0));
}

#[test]
fn only_first_value_field_is_used() {
    let config = PivotConfig::new()
        .with_rows(["dept"])
        .with_value("amt", Aggregation::Sum)
        .with_value("dept", Aggregation::Count);
    let table = pivot(&dept_rows(), &config, &EngineOptions::default());
    assert_eq!(table.value("A", "Value"), Some(30.0));
}

#[test]
fn without_value_field_cells_only_count() {
    let config = PivotConfig::new().with_rows(["dept"]);
    let table = pivot(&dept_rows(), &config, &EngineOptions::default());
    let a = table.cell("A", "Value").expect("A bucket");
    assert_eq!(a.count, 2);
    assert!(a.values.is_empty());
    assert_eq!(table.value("A", "Value"), Some(2.0));
}

#[test]
fn custom_separator_joins_keys() {
    let config = PivotConfig::new()
        .with_rows(["dept", "amt"])
        .with_value("amt", Aggregation::Count);
    let options = EngineOptions::default().with_key_separator("/");
    let table = pivot(&dept_rows(), &config, &options);
    assert_eq!(
        table.row_keys().collect::<Vec<_>>(),
        vec!["A/10", "A/20", "B/5"]
    );
}

#[test]
fn pivot_dataset_rejects_unknown_columns() {
    let dataset = Dataset::new(
        "depts",
        vec!["dept".to_string(), "amt".to_string()],
        dept_rows(),
    )
    .expect("valid");
    let config = PivotConfig::new()
        .with_rows(["dept"])
        .with_columns(["quarter"])
        .with_value("amt", Aggregation::Sum);
    assert_eq!(
        pivot_dataset(&dataset, &config),
        Err(ModelError::UnknownColumn {
            column: "quarter".to_string()
        })
    );
}
