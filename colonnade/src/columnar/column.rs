//! This module defines the trait [Column],
//! which captures what every column offers independently of its value type.

use std::fmt::Debug;

use crate::{
    columnar::text_column::TextColumn, datatypes::ColumnType, error::Error, tabular::Table,
};

/// A trait representing a named column of data, with one entry per row.
///
/// The trait is object safe, so that columns of different types
/// can be handled through `&dyn Column`.
pub trait Column: Debug {
    /// Returns the name of the column.
    fn name(&self) -> &str;

    /// Returns the declared type of the column.
    fn column_type(&self) -> ColumnType;

    /// Returns the number of rows in the column, including missing ones.
    fn size(&self) -> usize;

    /// Returns true iff the column has no rows.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the value at the given row as a string.
    fn get_string(&self, index: usize) -> Result<String, Error>;

    /// Returns true if the value at the given row is missing.
    fn is_missing(&self, index: usize) -> Result<bool, Error>;

    /// Returns the number of missing values.
    fn count_missing(&self) -> usize;

    /// Returns a table named "Column: <name>" with the columns "Measure" and "Value",
    /// reporting the number of rows and the number of missing values.
    fn summary(&self) -> Result<Table, Error> {
        let mut measure = TextColumn::new("Measure");
        let mut value = TextColumn::new("Value");

        measure.append("Count")?;
        value.append(self.size().to_string().as_str())?;

        measure.append("Missing")?;
        value.append(self.count_missing().to_string().as_str())?;

        let mut table = Table::new(format!("Column: {}", self.name()));
        table.add_column(measure)?;
        table.add_column(value)?;
        Ok(table)
    }
}
