//! This module defines [ColumnType].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Descriptors to refer to the declared type of a column at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Free-form text, stored as plain strings.
    Text,
    /// Categorical strings, stored in a dictionary.
    String,
    /// Truth values.
    Boolean,
    /// Signed integers.
    Integer,
    /// Double precision floating point numbers.
    Double,
}

impl ColumnType {
    /// Returns true if values of this type can be appended to a text column.
    pub fn is_string_compatible(&self) -> bool {
        matches!(self, ColumnType::Text | ColumnType::String)
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Text => write!(f, "TEXT"),
            ColumnType::String => write!(f, "STRING"),
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Double => write!(f, "DOUBLE"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ColumnType;

    #[test]
    fn string_compatibility() {
        assert!(ColumnType::Text.is_string_compatible());
        assert!(ColumnType::String.is_string_compatible());
        assert!(!ColumnType::Boolean.is_string_compatible());
        assert!(!ColumnType::Integer.is_string_compatible());
    }

    #[test]
    fn display() {
        assert_eq!(ColumnType::Text.to_string(), "TEXT");
        assert_eq!(ColumnType::String.to_string(), "STRING");
    }

    #[test]
    fn serialized_by_variant_name() {
        let types = vec![ColumnType::Text, ColumnType::String, ColumnType::Boolean];
        let json = serde_json::to_string(&types).unwrap();

        assert_eq!(json, r#"["Text","String","Boolean"]"#);
        assert_eq!(serde_json::from_str::<Vec<ColumnType>>(&json).unwrap(), types);
    }
}
