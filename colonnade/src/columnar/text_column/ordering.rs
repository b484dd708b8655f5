//! Sorting [TextColumn]s and comparing their rows.

use std::cmp::Ordering;

use crate::{columnar::encoding::TextEncoding, error::Error};

use super::TextColumn;

impl TextColumn {
    /// Sort the rows in place in ascending order.
    /// Rows with equal values keep their relative order.
    pub fn sort_ascending(&mut self) {
        self.encoding.sort(false);
    }

    /// Sort the rows in place in descending order.
    /// Rows with equal values keep their relative order.
    pub fn sort_descending(&mut self) {
        self.encoding.sort(true);
    }

    /// Return a comparator over row indices that compares the values of the two rows.
    ///
    /// The comparator does not check its indices: callers must only pass rows
    /// of this column, as [Permutator][crate::permutator::Permutator] does.
    /// A nonexistent row compares less than every existing one.
    /// Use [TextColumn::compare_rows] where indices are not known to be valid.
    pub fn row_comparator(&self) -> impl Fn(usize, usize) -> Ordering + '_ {
        move |left, right| self.encoding.get(left).cmp(&self.encoding.get(right))
    }

    /// Compare the values of two rows.
    ///
    /// Returns [Error::IndexOutOfRange] if either row does not exist.
    pub fn compare_rows(&self, left: usize, right: usize) -> Result<Ordering, Error> {
        Ok(self.get(left)?.cmp(self.get(right)?))
    }
}
