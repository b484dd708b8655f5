//! Error-handling module for the CLI

use thiserror::Error;

/// Error-Collection for all the possible errors occurring in this crate
#[derive(Error, Debug)]
pub enum CliError {
    /// The requested field exists neither as header nor as index
    #[error("no column `{column}` in `{filename}`")]
    ColumnNotFound {
        /// Header name or index that was asked for
        column: String,
        /// File that was read
        filename: String,
    },
    /// The delimiter does not fit into a single byte
    #[error("delimiter `{0}` is not a single byte character")]
    InvalidDelimiter(char),
    /// Error while reading delimited input
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// Error resulting from io operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Error originating from colonnade
    #[error(transparent)]
    ColonnadeError(#[from] colonnade::error::Error),
}
