//! Error-handling module for the crate

use std::{collections::TryReserveError, convert::Infallible};

use thiserror::Error;

use crate::datatypes::ColumnType;

/// Error-Collection for errors related to turning raw input into column values.
/// Used by the [`ColumnParser`][crate::parser::ColumnParser] interface.
#[derive(Error, Debug)]
pub enum ReadingError {
    /// Error occurred during parsing of Int values
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),
    /// Error occurred during parsing of Float values
    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),
    /// Error occurred during parsing of boolean values
    #[error(transparent)]
    ParseBool(#[from] std::str::ParseBoolError),
    /// Type conversion error
    #[error("Failed to convert value \"{0}\" to type {1}.")]
    TypeConversionError(String, ColumnType),
}

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug)]
pub enum Error {
    /// A row index was used that is not part of the column
    #[error("Row index {index} is out of range for column \"{column}\" of size {size}")]
    IndexOutOfRange {
        /// Name of the accessed column
        column: String,
        /// Offending row index
        index: usize,
        /// Size of the column at the time of access
        size: usize,
    },
    /// A single value of the wrong type was offered to a column
    #[error("Cannot append {actual} to column \"{column}\" of type {expected}")]
    TypeMismatch {
        /// Name of the receiving column
        column: String,
        /// Type of the receiving column
        expected: ColumnType,
        /// Type of the rejected value
        actual: ColumnType,
    },
    /// A column of the wrong type was appended to another column
    #[error("Column '{column}' has type {column_type}, but column '{other}' has type {other_type}.")]
    ColumnTypeMismatch {
        /// Name of the receiving column
        column: String,
        /// Type of the receiving column
        column_type: ColumnType,
        /// Name of the appended column
        other: String,
        /// Type of the appended column
        other_type: ColumnType,
    },
    /// Operation that is meaningless for this kind of column
    #[error("{operation} is not supported: {reason}")]
    UnsupportedOperation {
        /// Name of the operation
        operation: &'static str,
        /// Why the operation is unsupported
        reason: String,
    },
    /// The dictionary of a column ran out of ids
    #[error("The dictionary of column \"{column}\" cannot hold any more distinct values")]
    DictionaryOverflow {
        /// Name of the column
        column: String,
    },
    /// Storage for the requested number of rows could not be allocated
    #[error("Column \"{column}\" cannot hold {rows} rows: {source}")]
    CapacityExceeded {
        /// Name of the column
        column: String,
        /// Requested number of rows
        rows: usize,
        /// Reason reported by the allocator
        source: TryReserveError,
    },
    /// Permutation shall be sorted, but the input data is of different length
    #[error("The provided data-structures do not have the same length: {0:?}")]
    PermutationSortLen(Vec<usize>),
    /// Permutation shall be applied to data of a different length
    #[error("Permutation length ({0}) does not match the data length ({1})")]
    PermutationApplyWrongLen(usize, usize),
    /// A column of the wrong size was added to a table
    #[error("Table \"{table}\" has {expected} rows, but column \"{column}\" has {actual}")]
    TableColumnSize {
        /// Name of the table
        table: String,
        /// Name of the rejected column
        column: String,
        /// Row count of the table
        expected: usize,
        /// Size of the rejected column
        actual: usize,
    },
    /// Error that happened while parsing a raw value
    #[error(transparent)]
    ReadingError(#[from] ReadingError),
}

impl From<Infallible> for ReadingError {
    fn from(_value: Infallible) -> Self {
        unreachable!("Infallible can never occur!")
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::datatypes::ColumnType;

    #[test]
    fn column_type_mismatch_names_both_columns() {
        let error = Error::ColumnTypeMismatch {
            column: "notes".to_string(),
            column_type: ColumnType::Text,
            other: "flags".to_string(),
            other_type: ColumnType::Boolean,
        };

        assert_eq!(
            error.to_string(),
            "Column 'notes' has type TEXT, but column 'flags' has type BOOLEAN."
        );
    }
}
