//! This module defines [BooleanColumn].

use std::mem::size_of;

use bitvec::{order::Lsb0, vec::BitVec};

use crate::{
    bytesized::ByteSized, columnar::column::Column, datatypes::ColumnType, error::Error,
    selection::Selection,
};

/// A column of truth values, used as indicator column.
///
/// Boolean columns have no missing values.
#[derive(Debug, Clone)]
pub struct BooleanColumn {
    name: String,
    values: BitVec<usize, Lsb0>,
}

impl BooleanColumn {
    /// Create an empty column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BitVec::new(),
        }
    }

    /// Create a column with `size` rows that is true exactly in the selected rows.
    /// Selected rows at or beyond `size` are ignored.
    pub fn from_selection(name: impl Into<String>, selection: &Selection, size: usize) -> Self {
        let mut values = BitVec::repeat(false, size);
        for index in selection.iter().take_while(|&index| index < size) {
            values.set(index, true);
        }

        Self {
            name: name.into(),
            values,
        }
    }

    /// Return the value at the given row.
    pub fn get(&self, index: usize) -> Result<bool, Error> {
        self.values
            .get(index)
            .map(|bit| *bit)
            .ok_or_else(|| Error::IndexOutOfRange {
                column: self.name.clone(),
                index,
                size: self.values.len(),
            })
    }

    /// Append a value as a new row.
    pub fn append(&mut self, value: bool) -> &mut Self {
        self.values.push(value);
        self
    }

    /// Return the number of rows that are true.
    pub fn count_true(&self) -> usize {
        self.values.count_ones()
    }

    /// Return the rows that are true.
    pub fn as_selection(&self) -> Selection {
        self.values.iter_ones().collect()
    }
}

impl Column for BooleanColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Boolean
    }

    fn size(&self) -> usize {
        self.values.len()
    }

    fn get_string(&self, index: usize) -> Result<String, Error> {
        self.get(index).map(|value| value.to_string())
    }

    fn is_missing(&self, index: usize) -> Result<bool, Error> {
        self.get(index).map(|_| false)
    }

    fn count_missing(&self) -> usize {
        0
    }
}

impl ByteSized for BooleanColumn {
    fn size_bytes(&self) -> u64 {
        size_of::<Self>() as u64 + self.name.capacity() as u64 + (self.values.capacity() / 8) as u64
    }
}

#[cfg(test)]
mod test {
    use super::BooleanColumn;
    use crate::{columnar::column::Column, selection::Selection};

    #[test]
    fn from_selection() {
        let column = BooleanColumn::from_selection("flag", &Selection::from([1, 3, 9]), 4);

        assert_eq!(column.size(), 4);
        assert_eq!(column.count_true(), 2);
        assert!(column.get(1).unwrap());
        assert!(!column.get(2).unwrap());
        assert!(column.get(4).is_err());
        assert_eq!(column.as_selection(), Selection::from([1, 3]));
        assert_eq!(column.get_string(3).unwrap(), "true");
    }

    #[test]
    fn summary_has_no_missing_values() {
        let mut column = BooleanColumn::new("flag");
        column.append(true).append(false);

        let summary = column.summary().unwrap();
        assert_eq!(summary.column("Value").unwrap().as_list(), vec!["2", "0"]);
    }
}
