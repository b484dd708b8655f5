//! This module defines [Table], a named collection of equally sized text columns.
//! Tables are the carrier of column summaries.

use std::fmt::Display;

use itertools::Itertools;

use crate::{
    columnar::{column::Column, text_column::TextColumn},
    error::Error,
};

/// A named list of [TextColumn]s that all have the same number of rows.
#[derive(Debug, Default)]
pub struct Table {
    name: String,
    columns: Vec<TextColumn>,
}

impl Table {
    /// Create a new table without columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Return the name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a column to the table.
    ///
    /// Returns [Error::TableColumnSize] if the table already has columns
    /// and the new column has a different number of rows.
    pub fn add_column(&mut self, column: TextColumn) -> Result<&mut Self, Error> {
        if let Some(first) = self.columns.first() {
            if first.size() != column.size() {
                return Err(Error::TableColumnSize {
                    table: self.name.clone(),
                    column: column.name().to_string(),
                    expected: first.size(),
                    actual: column.size(),
                });
            }
        }

        self.columns.push(column);
        Ok(self)
    }

    /// Return the column with the given name.
    pub fn column(&self, name: &str) -> Option<&TextColumn> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Return all columns in the order they were added.
    pub fn columns(&self) -> &[TextColumn] {
        &self.columns
    }

    /// Return the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Return the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.size())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;

        let widths = self
            .columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .chain(std::iter::once(column.name()))
                    .map(|value| value.chars().count())
                    .max()
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();

        let header = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| format!("{:<width$}", column.name()))
            .join("  ");
        writeln!(f, "{}", header.trim_end())?;

        for row in 0..self.row_count() {
            let line = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| format!("{:<width$}", column.get(row).unwrap_or_default()))
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
