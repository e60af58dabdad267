use sheetwise_model::IssueKind;

use crate::dataset::Dataset;

/// Points deducted per missing-value issue, scaled by column count.
const MISSING_PENALTY: f64 = 10.0;

/// Data health score shown beside the issue list.
///
/// `100 - (missing issues / columns) * 10`; a dataset without columns
/// counts as one column.
pub fn health_score(dataset: &Dataset) -> f64 {
    let missing = dataset.issues_of(IssueKind::Missing).count() as f64;
    let columns = dataset.column_count().max(1) as f64;
    100.0 - missing / columns * MISSING_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetwise_model::{Row, Value};

    #[test]
    fn clean_dataset_scores_100() {
        let rows: Vec<Row> = vec![[("a", 1.0)].into_iter().collect()];
        let dataset = Dataset::new("d", vec!["a".to_string()], rows).expect("valid");
        assert!((health_score(&dataset) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn one_of_two_columns_missing_scores_95() {
        let rows: Vec<Row> = vec![
            [("a", Value::from(1.0)), ("b", Value::Absent)]
                .into_iter()
                .collect(),
        ];
        let dataset =
            Dataset::new("d", vec!["a".to_string(), "b".to_string()], rows).expect("valid");
        assert!((health_score(&dataset) - 95.0).abs() < f64::EPSILON);
    }
}
