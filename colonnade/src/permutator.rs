//! Holds the [Permutator] struct, which allows one to define a logical permutation
//! of the rows of one or more columns and to apply it to other columns.

use std::cmp::Ordering;

use crate::{
    columnar::{column::Column, text_column::TextColumn},
    error::Error,
};

/// Allows one to define a logical permutation of the rows of index-based data structures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutator {
    sort_vec: Vec<usize>,
}

impl Permutator {
    /// Creates a [Permutator] based on one slice of sort-able data
    pub fn sort_from_vec<T>(data: &[T]) -> Permutator
    where
        T: Ord,
    {
        let mut vec = (0..data.len()).collect::<Vec<usize>>();
        vec.sort_by_key(|&i| &data[i]);
        Permutator { sort_vec: vec }
    }

    /// Creates a [Permutator] that sorts the rows of the given column in ascending order.
    pub fn sort_from_column(column: &TextColumn) -> Permutator {
        let compare = column.row_comparator();
        let mut vec = (0..column.size()).collect::<Vec<usize>>();
        vec.sort_by(|&a, &b| compare(a, b));
        Permutator { sort_vec: vec }
    }

    /// Create a [Permutator] that sorts the rows of the given columns lexicographically,
    /// i.e., later columns only decide between rows that are equal in all earlier columns.
    ///
    /// Returns [Error::PermutationSortLen] if the given columns differ in length.
    pub fn sort_from_columns(columns: &[&TextColumn]) -> Result<Permutator, Error> {
        let len = match columns.first() {
            Some(first) => {
                let len = first.size();
                if columns.iter().any(|column| column.size() != len) {
                    return Err(Error::PermutationSortLen(
                        columns.iter().map(|column| column.size()).collect(),
                    ));
                }
                len
            }
            None => 0,
        };

        let comparators = columns
            .iter()
            .map(|column| column.row_comparator())
            .collect::<Vec<_>>();

        let mut vec = (0..len).collect::<Vec<usize>>();
        vec.sort_by(|&a, &b| {
            comparators
                .iter()
                .map(|compare| compare(a, b))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        log::debug!("computed permutation of {len} rows over {} columns", columns.len());
        Ok(Permutator { sort_vec: vec })
    }

    /// Returns the vector which contains the sorted indices
    pub fn sort_vec(&self) -> &[usize] {
        &self.sort_vec
    }

    /// Returns the number of permuted rows.
    pub fn len(&self) -> usize {
        self.sort_vec.len()
    }

    /// Returns true if the permutation is empty.
    pub fn is_empty(&self) -> bool {
        self.sort_vec.is_empty()
    }

    /// Permutes a given slice of data with the computed sort-order
    pub fn permute<'a, T>(&'a self, data: &'a [T]) -> Result<impl Iterator<Item = T> + 'a, Error>
    where
        T: Clone,
    {
        if data.len() != self.sort_vec.len() {
            return Err(Error::PermutationApplyWrongLen(
                self.sort_vec.len(),
                data.len(),
            ));
        }

        Ok(self.sort_vec.iter().map(|&idx| data[idx].clone()))
    }

    /// Applies the permutation to a column, producing a reordered copy with the same name and encoding.
    ///
    /// *Returns* either a [TextColumn] or an [Error][Error::PermutationApplyWrongLen]
    pub fn apply_column(&self, column: &TextColumn) -> Result<TextColumn, Error> {
        if column.size() != self.sort_vec.len() {
            return Err(Error::PermutationApplyWrongLen(
                self.sort_vec.len(),
                column.size(),
            ));
        }

        column.subset(self.sort_vec.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::Permutator;
    use crate::{
        columnar::{encoding::Encoding, text_column::TextColumn},
        error::Error,
    };
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn sort_from_vec(vec_u64: Vec<u64>, vec_string: Vec<String>) -> bool {
        log::debug!(
            "used values:\nvec_u64: {:?}\nvec_string: {:?}",
            vec_u64,
            vec_string
        );

        let mut sorted_u64 = vec_u64.clone();
        sorted_u64.sort();
        let mut sorted_string = vec_string.clone();
        sorted_string.sort();

        let permuted_u64 = Permutator::sort_from_vec(&vec_u64)
            .permute(&vec_u64)
            .map(|values| values.collect::<Vec<_>>());
        let permuted_string = Permutator::sort_from_vec(&vec_string)
            .permute(&vec_string)
            .map(|values| values.collect::<Vec<_>>());

        permuted_u64.ok() == Some(sorted_u64) && permuted_string.ok() == Some(sorted_string)
    }

    #[quickcheck]
    fn column_permutation_sorts(values: Vec<String>) -> bool {
        let column =
            TextColumn::from_values_with_encoding("c", &values, Encoding::Dictionary).unwrap();
        let permuted = Permutator::sort_from_column(&column)
            .apply_column(&column)
            .unwrap();

        let mut sorted = values.clone();
        sorted.sort();
        permuted.as_list() == sorted
    }

    #[test]
    fn multiple_columns() {
        let last = TextColumn::from_values("last", ["smith", "jones", "smith", "jones"]).unwrap();
        let first = TextColumn::from_values_with_encoding(
            "first",
            ["bob", "eve", "ann", "al"],
            Encoding::Dictionary,
        )
        .unwrap();
        let age = TextColumn::from_values("age", ["40", "31", "22", "58"]).unwrap();

        let permutator = Permutator::sort_from_columns(&[&last, &first]).unwrap();
        assert_eq!(permutator.sort_vec(), &[3, 1, 2, 0]);

        let ages = permutator.apply_column(&age).unwrap();
        assert_eq!(ages.as_list(), vec!["58", "31", "22", "40"]);
        assert_eq!(
            permutator.apply_column(&first).unwrap().encoding(),
            Encoding::Dictionary
        );
    }

    #[test]
    fn ties_keep_row_order() {
        let key = TextColumn::from_values("key", ["b", "a", "b", "a"]).unwrap();
        let permutator = Permutator::sort_from_columns(&[&key]).unwrap();
        assert_eq!(permutator.sort_vec(), &[1, 3, 0, 2]);
    }

    #[test]
    fn length_mismatch() {
        let short = TextColumn::from_values("short", ["a"]).unwrap();
        let long = TextColumn::from_values("long", ["a", "b"]).unwrap();

        assert!(matches!(
            Permutator::sort_from_columns(&[&short, &long]),
            Err(Error::PermutationSortLen(lens)) if lens == vec![1, 2]
        ));

        let permutator = Permutator::sort_from_column(&short);
        assert!(matches!(
            permutator.apply_column(&long),
            Err(Error::PermutationApplyWrongLen(1, 2))
        ));
        assert!(Permutator::sort_from_columns(&[]).unwrap().is_empty());
    }
}
