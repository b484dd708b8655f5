//! This module implements [Selection].

use std::{collections::BTreeSet, mem::size_of, ops::Range};

use bitvec::{order::Lsb0, vec::BitVec};

use crate::bytesized::ByteSized;

/// Single indices below this bound are stored in the bit vector,
/// larger ones only if the bit vector already covers them.
const DENSE_LIMIT: usize = 1 << 24;

/// An ordered set of row indices,
/// used to address a subset of the rows of a column.
///
/// A selection does not know the column it was computed from.
/// Iteration always yields indices in ascending order.
///
/// Indices are kept in a bit vector, except for isolated indices far beyond it,
/// which are kept in an ordered set. Every index in that set is at least
/// the length of the bit vector.
/// Ranges are always stored in the bit vector, so their end is expected to be
/// a row count rather than an arbitrary index.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    bits: BitVec<usize, Lsb0>,
    sparse: BTreeSet<usize>,
}

impl Selection {
    /// Create an empty [Selection].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [Selection] containing every index in the given range.
    pub fn with_range(range: Range<usize>) -> Self {
        let mut result = Self::new();
        result.add_range(range);
        result
    }

    /// Grow the bit vector to `len` bits,
    /// moving the sparse indices it now covers into it.
    fn grow_dense(&mut self, len: usize) {
        if len <= self.bits.len() {
            return;
        }

        self.bits.resize(len, false);
        let beyond = self.sparse.split_off(&len);
        for index in std::mem::replace(&mut self.sparse, beyond) {
            self.bits.set(index, true);
        }
    }

    /// Add a single index.
    pub fn add(&mut self, index: usize) -> &mut Self {
        if index < self.bits.len() {
            self.bits.set(index, true);
        } else if index < DENSE_LIMIT {
            self.grow_dense(index + 1);
            self.bits.set(index, true);
        } else {
            self.sparse.insert(index);
        }
        self
    }

    /// Add all indices of the given range.
    pub fn add_range(&mut self, range: Range<usize>) -> &mut Self {
        if range.is_empty() {
            return self;
        }

        self.grow_dense(range.end);
        self.bits[range].fill(true);
        self
    }

    /// Remove a single index.
    pub fn remove(&mut self, index: usize) -> &mut Self {
        if index < self.bits.len() {
            self.bits.set(index, false);
        } else {
            self.sparse.remove(&index);
        }
        self
    }

    /// Return true if the index is part of this selection.
    pub fn contains(&self, index: usize) -> bool {
        match self.bits.get(index) {
            Some(bit) => *bit,
            None => self.sparse.contains(&index),
        }
    }

    /// Return the number of selected indices.
    pub fn len(&self) -> usize {
        self.bits.count_ones() + self.sparse.len()
    }

    /// Return true if no index is selected.
    pub fn is_empty(&self) -> bool {
        self.bits.not_any() && self.sparse.is_empty()
    }

    /// Iterate over the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones().chain(self.sparse.iter().copied())
    }

    /// Return the selected indices in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Keep only indices that are also contained in `other`.
    pub fn and(&mut self, other: &Selection) -> &mut Self {
        let dropped = self
            .bits
            .iter_ones()
            .filter(|&index| !other.contains(index))
            .collect::<Vec<_>>();
        for index in dropped {
            self.bits.set(index, false);
        }
        self.sparse.retain(|&index| other.contains(index));
        self
    }

    /// Add all indices contained in `other`.
    pub fn or(&mut self, other: &Selection) -> &mut Self {
        self.grow_dense(other.bits.len());
        for index in other.bits.iter_ones() {
            self.bits.set(index, true);
        }
        for &index in &other.sparse {
            self.add(index);
        }
        self
    }

    /// Remove all indices contained in `other`.
    pub fn and_not(&mut self, other: &Selection) -> &mut Self {
        for index in other.iter() {
            self.remove(index);
        }
        self
    }

    /// Complement this selection within the given range:
    /// indices of the range are toggled, indices outside are left untouched.
    pub fn flip(&mut self, range: Range<usize>) -> &mut Self {
        if range.is_empty() {
            return self;
        }

        self.grow_dense(range.end);
        for index in range {
            let value = self.bits[index];
            self.bits.set(index, !value);
        }
        self
    }

    /// Return the smallest selected index.
    pub fn first(&self) -> Option<usize> {
        self.bits
            .first_one()
            .or_else(|| self.sparse.first().copied())
    }

    /// Return the largest selected index.
    pub fn last(&self) -> Option<usize> {
        self.sparse
            .last()
            .copied()
            .or_else(|| self.bits.last_one())
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Selection {}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut result = Self::new();
        for index in iter {
            result.add(index);
        }
        result
    }
}

impl<const N: usize> From<[usize; N]> for Selection {
    fn from(indices: [usize; N]) -> Self {
        indices.into_iter().collect()
    }
}

impl ByteSized for Selection {
    fn size_bytes(&self) -> u64 {
        // We cast everything to u64 separately to avoid overflows
        size_of::<Self>() as u64
            + (self.bits.capacity() / 8) as u64
            + (self.sparse.len() as u64) * (size_of::<usize>() as u64)
    }
}
