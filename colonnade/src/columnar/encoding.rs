//! This module defines the trait [TextEncoding] and its implementations,
//! as well as [EncodingEnum],
//! which collects all implementations of [TextEncoding] into a single object.

pub(crate) mod dictionary;
pub(crate) mod plain;

use std::{collections::TryReserveError, fmt::Debug, mem::size_of};

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::{bytesized::ByteSized, datatypes::ColumnType, dictionary::DictionaryMap};

use self::{dictionary::DictionaryEncoding, plain::PlainEncoding};

/// Physical storage strategies for the values of a text column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Every row stores its own string.
    #[default]
    Plain,
    /// Rows store ids into a dictionary of distinct strings.
    Dictionary,
}

impl Encoding {
    /// Return the declared [ColumnType] of columns using this encoding.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Encoding::Plain => ColumnType::Text,
            Encoding::Dictionary => ColumnType::String,
        }
    }

    /// Create an empty storage object of this kind.
    pub(crate) fn create(&self) -> EncodingEnum {
        match self {
            Encoding::Plain => PlainEncoding::default().into(),
            Encoding::Dictionary => DictionaryEncoding::default().into(),
        }
    }
}

/// Marker for a value that could not be stored,
/// because the dictionary has no ids left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DictionaryFull;

/// A trait representing the storage of a text column.
///
/// Implementations do not check row indices for [TextEncoding::set];
/// callers are expected to validate them first.
#[enum_dispatch]
pub(crate) trait TextEncoding: Debug {
    /// Returns the kind of this encoding.
    fn kind(&self) -> Encoding;

    /// Returns the number of stored rows.
    fn len(&self) -> usize;

    /// Returns the value at the given index, or `None` if it is out of bounds.
    fn get(&self, index: usize) -> Option<&str>;

    /// Overwrites the value at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn set(&mut self, index: usize, value: &str) -> Result<(), DictionaryFull>;

    /// Appends a value.
    fn push(&mut self, value: &str) -> Result<(), DictionaryFull>;

    /// Removes all values.
    fn clear(&mut self);

    /// Reserves capacity for at least `additional` more rows.
    fn reserve(&mut self, additional: usize);

    /// Reserves capacity for at least `additional` more rows,
    /// reporting allocation failure instead of aborting.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError>;

    /// Sorts the values in place, keeping equal values in their relative order.
    fn sort(&mut self, descending: bool);

    /// Returns an iterator over the values in row order.
    fn iter(&self) -> TextIter<'_>;

    /// Returns the dictionary backing this storage, if there is one.
    fn dictionary(&self) -> Option<&DictionaryMap> {
        None
    }
}

/// Enum for encoding implementations
#[enum_dispatch(TextEncoding)]
#[derive(Debug, Clone)]
pub(crate) enum EncodingEnum {
    PlainEncoding,
    DictionaryEncoding,
}

impl ByteSized for EncodingEnum {
    fn size_bytes(&self) -> u64 {
        let size_encoding = match self {
            EncodingEnum::PlainEncoding(encoding) => encoding.size_bytes(),
            EncodingEnum::DictionaryEncoding(encoding) => encoding.size_bytes(),
        };
        size_of::<Self>() as u64 + size_encoding
    }
}

/// Iterator over the values of a text column.
#[derive(Debug, Clone)]
pub enum TextIter<'a> {
    /// Case PlainEncoding
    Plain(std::slice::Iter<'a, String>),
    /// Case DictionaryEncoding
    Dictionary {
        /// Remaining ids
        codes: std::slice::Iter<'a, u32>,
        /// Dictionary resolving the ids
        dictionary: &'a DictionaryMap,
    },
}

impl<'a> Iterator for TextIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TextIter::Plain(iterator) => iterator.next().map(String::as_str),
            TextIter::Dictionary { codes, dictionary } => {
                codes.next().and_then(|&code| dictionary.get(code))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            TextIter::Plain(iterator) => iterator.size_hint(),
            TextIter::Dictionary { codes, .. } => codes.size_hint(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Encoding, TextEncoding};
    use crate::datatypes::ColumnType;
    use test_log::test;

    fn fill(encoding: Encoding) -> super::EncodingEnum {
        let mut storage = encoding.create();
        for value in ["pear", "apple", "fig", "apple", ""] {
            storage.push(value).unwrap();
        }
        storage
    }

    #[test]
    fn encodings_agree() {
        let mut plain = fill(Encoding::Plain);
        let mut dictionary = fill(Encoding::Dictionary);

        assert_eq!(plain.len(), dictionary.len());
        assert!(plain.iter().eq(dictionary.iter()));

        plain.set(2, "kiwi").unwrap();
        dictionary.set(2, "kiwi").unwrap();
        assert_eq!(plain.get(2), Some("kiwi"));
        assert!(plain.iter().eq(dictionary.iter()));

        assert_eq!(plain.get(5), None);
        assert_eq!(dictionary.get(5), None);
    }

    #[test]
    fn encodings_sort_alike() {
        for descending in [false, true] {
            let mut plain = fill(Encoding::Plain);
            let mut dictionary = fill(Encoding::Dictionary);

            plain.sort(descending);
            dictionary.sort(descending);

            let expected = if descending {
                vec!["pear", "fig", "apple", "apple", ""]
            } else {
                vec!["", "apple", "apple", "fig", "pear"]
            };
            assert_eq!(plain.iter().collect::<Vec<_>>(), expected);
            assert_eq!(dictionary.iter().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn dictionary_capability() {
        assert!(fill(Encoding::Plain).dictionary().is_none());

        let dictionary = fill(Encoding::Dictionary);
        let map = dictionary.dictionary().unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.fetch_id("apple"), Some(1));
    }

    #[test]
    fn declared_types() {
        assert_eq!(Encoding::Plain.column_type(), ColumnType::Text);
        assert_eq!(Encoding::Dictionary.column_type(), ColumnType::String);
        assert_eq!(fill(Encoding::Dictionary).kind(), Encoding::Dictionary);
    }

    #[test]
    fn encoding_names_in_configuration() {
        assert_eq!(
            serde_json::to_string(&Encoding::Dictionary).unwrap(),
            r#""dictionary""#
        );
        assert_eq!(
            serde_json::from_str::<Encoding>(r#""plain""#).unwrap(),
            Encoding::Plain
        );
        assert!(serde_json::from_str::<Encoding>(r#""Plain""#).is_err());
    }
}
