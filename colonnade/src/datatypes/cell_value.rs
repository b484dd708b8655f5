//! This module defines [CellValue].

use super::ColumnType;

/// A single value of any supported type,
/// used where a column accepts input whose type is only known at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// A string
    Text(String),
    /// An integer
    Integer(i64),
    /// A double
    Double(f64),
    /// A truth value
    Boolean(bool),
}

impl CellValue {
    /// Return the [ColumnType] a column would need to store this value.
    pub fn value_type(&self) -> ColumnType {
        match self {
            CellValue::Text(_) => ColumnType::Text,
            CellValue::Integer(_) => ColumnType::Integer,
            CellValue::Double(_) => ColumnType::Double,
            CellValue::Boolean(_) => ColumnType::Boolean,
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Double(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}
