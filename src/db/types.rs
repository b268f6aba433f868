//! Driver result types.
//!
//! Defines the structures drivers use to report query results before the
//! reader maps them into a typed table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw result of executing a SQL query, in the query's own column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResult {
    /// Column descriptions for the result set, in query order.
    pub columns: Vec<RawColumn>,

    /// Rows of data. Every row has one value per column.
    pub rows: Vec<Row>,
}

impl RawResult {
    /// Creates a raw result with the given columns and rows.
    pub fn with_data(columns: Vec<RawColumn>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Returns true if the result set has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Driver-reported description of a result column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawColumn {
    /// Column name.
    pub name: String,

    /// Native type name as reported by the driver.
    pub type_name: String,

    /// Coarse category of the native type.
    pub category: TypeCategory,
}

impl RawColumn {
    /// Creates a new column description.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            category,
        }
    }
}

/// Coarse classification of a driver-native column type.
///
/// Only the distinction between text-like, date/time-like and everything
/// else matters downstream; the full native type name is kept on
/// [`RawColumn`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    /// Character data: text, varchar, char, enum names, etc.
    Textual,

    /// Date, time and timestamp types.
    Temporal,

    /// Everything else: numerics, booleans, binary, ...
    #[default]
    Other,
}

/// A row of data from a query result.
pub type Row = Vec<Value>;

/// Represents a single value from a database query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (up to i64).
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text/string value.
    String(String),

    /// Binary data.
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts the value to its string representation.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::Bytes(b) => format!("<{} bytes>", b.len()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

// Conversion implementations for common types
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_display_string(), "NULL");
        assert_eq!(Value::Bool(true).to_display_string(), "true");
        assert_eq!(Value::Int(42).to_display_string(), "42");
        assert_eq!(Value::Float(2.71).to_display_string(), "2.71");
        assert_eq!(
            Value::String("hello".to_string()).to_display_string(),
            "hello"
        );
        assert_eq!(Value::Bytes(vec![1, 2, 3]).to_display_string(), "<3 bytes>");
    }

    #[test]
    fn test_value_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());
        assert!(!Value::Int(0).is_null());
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(2.71f64), Value::Float(2.71));
        assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(42i32)), Value::Int(42));
    }

    #[test]
    fn test_raw_result_with_data() {
        let columns = vec![
            RawColumn::new("id", "INT4", TypeCategory::Other),
            RawColumn::new("name", "VARCHAR", TypeCategory::Textual),
        ];
        let rows = vec![
            vec![Value::Int(1), Value::String("Alice".to_string())],
            vec![Value::Int(2), Value::String("Bob".to_string())],
        ];

        let result = RawResult::with_data(columns, rows);

        assert!(!result.is_empty());
        assert_eq!(result.columns.len(), 2);
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn test_raw_result_empty() {
        let result = RawResult::with_data(
            vec![RawColumn::new("id", "INT4", TypeCategory::Other)],
            vec![],
        );
        assert!(result.is_empty());
        assert_eq!(result.columns.len(), 1);
    }
}
