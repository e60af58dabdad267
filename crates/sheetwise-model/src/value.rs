//! Scalar cell values and rows.
//!
//! A cell is one of absent, text, number, boolean or date. Absent values and
//! empty strings are both treated as missing everywhere in the engine.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

static ABSENT: Value = Value::Absent;

/// Date formats accepted when a text cell is checked for a calendar date.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y", "%d %b %Y", "%b %d, %Y", "%B %d, %Y",
];

/// Datetime formats; only the date component is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A single cell value as handed over by a file decoder.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null or undefined.
    #[default]
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Value {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for absent cells and empty strings.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the cell as a finite number, parsing text cells when needed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => parse_finite(s),
            _ => None,
        }
    }

    /// Returns the cell as a calendar date, parsing text cells when needed.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => parse_date(s),
            _ => None,
        }
    }

    /// Returns the cell as a boolean; text must read `true` or `false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(s) => parse_bool(s),
            _ => None,
        }
    }

    /// Name of the native scalar kind carried by this cell.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Date(_) => "date",
        }
    }

    /// Canonical encoding used for structural equality.
    ///
    /// Missing cells share one encoding, so an absent cell and an empty
    /// string compare equal. Text is length-prefixed so concatenated
    /// signatures stay unambiguous.
    pub fn signature(&self) -> String {
        let mut out = String::new();
        self.write_signature(&mut out);
        out
    }

    /// Appends the canonical encoding to `out`.
    pub fn write_signature(&self, out: &mut String) {
        match self {
            _ if self.is_missing() => out.push('~'),
            Self::Text(s) => {
                out.push_str(&format!("s{}:", s.len()));
                out.push_str(s);
            }
            Self::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                out.push_str(&format!("n{n:?};"));
            }
            Self::Bool(b) => out.push_str(if *b { "b1;" } else { "b0;" }),
            Self::Date(d) => out.push_str(&format!("d{};", d.format("%Y-%m-%d"))),
            Self::Absent => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Parses trimmed text as a finite float.
pub fn parse_finite(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses trimmed text as a calendar date.
///
/// Accepts ISO dates, common US/European spellings, ISO datetimes and
/// RFC 3339 timestamps (the time part is dropped), and `YYYY-MM`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    // Year and month only: 2024-03
    if trimmed.len() == 7 && trimmed.as_bytes().get(4) == Some(&b'-') {
        return NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok();
    }
    None
}

/// Parses `true`/`false` case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// One record of a dataset: column name to cell value.
///
/// Looking up a column the row does not carry yields [`Value::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `column`, or `Absent` if the row has no such key.
    pub fn get(&self, column: &str) -> &Value {
        self.0.get(column).unwrap_or(&ABSENT)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(column.into(), value.into());
    }

    /// Returns a copy of this row with `column` set to `value`.
    #[must_use]
    pub fn with(&self, column: &str, value: Value) -> Self {
        let mut next = self.clone();
        next.0.insert(column.to_string(), value);
        next
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical signature over a fixed column list.
    ///
    /// Only the listed columns take part, in the given order, so two rows
    /// with the same cells compare equal regardless of how a decoder ordered
    /// their keys.
    pub fn signature(&self, columns: &[String]) -> String {
        let mut out = String::new();
        for column in columns {
            self.get(column).write_signature(&mut out);
            out.push('|');
        }
        out
    }
}

/// A row serialized as a map whose keys follow a column list.
///
/// Columns the row does not carry serialize as `null`; keys outside the
/// list are left out.
#[derive(Debug, Clone, Copy)]
pub struct OrderedRow<'a> {
    row: &'a Row,
    columns: &'a [String],
}

impl Row {
    /// View of this row that serializes in `columns` order.
    pub fn ordered<'a>(&'a self, columns: &'a [String]) -> OrderedRow<'a> {
        OrderedRow { row: self, columns }
    }
}

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            map.serialize_entry(column, self.row.get(column))?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
