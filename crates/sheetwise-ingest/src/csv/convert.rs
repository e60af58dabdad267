//! Polars `AnyValue` to engine `Value` conversion.

use polars::prelude::AnyValue;
use sheetwise_model::Value;

/// Converts a Polars `AnyValue` to a cell [`Value`].
///
/// Nulls become `Absent`, integers and floats become numbers, booleans stay
/// booleans and strings stay text. Anything else is kept as its text form.
pub fn any_to_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Absent,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int32(v) => Value::Number(f64::from(v)),
        AnyValue::Int64(v) => Value::Number(v as f64),
        AnyValue::UInt32(v) => Value::Number(f64::from(v)),
        AnyValue::UInt64(v) => Value::Number(v as f64),
        AnyValue::Float32(v) => Value::Number(f64::from(v)),
        AnyValue::Float64(v) => Value::Number(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        other => Value::Text(other.to_string()),
    }
}
