//! This module defines [DictionaryEncoding].

use std::{collections::TryReserveError, mem::size_of};

use crate::{
    bytesized::{size_inner_vec_flat, ByteSized},
    columnar::encoding::{DictionaryFull, Encoding, TextEncoding, TextIter},
    dictionary::DictionaryMap,
};

/// Implementation of [TextEncoding] that stores one `u32` id per row
/// and keeps every distinct string only once, in a [DictionaryMap].
///
/// Ids of strings that are no longer used by any row stay in the dictionary.
#[derive(Debug, Clone, Default)]
pub(crate) struct DictionaryEncoding {
    codes: Vec<u32>,
    dictionary: DictionaryMap,
}

impl DictionaryEncoding {
    /// Returns the dictionary id of every row.
    pub(crate) fn codes(&self) -> &[u32] {
        &self.codes
    }

    fn encode(&mut self, value: &str) -> Result<u32, DictionaryFull> {
        self.dictionary.add_str(value).id().ok_or(DictionaryFull)
    }
}

impl TextEncoding for DictionaryEncoding {
    fn kind(&self) -> Encoding {
        Encoding::Dictionary
    }

    fn len(&self) -> usize {
        self.codes.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.codes
            .get(index)
            .and_then(|&code| self.dictionary.get(code))
    }

    fn set(&mut self, index: usize, value: &str) -> Result<(), DictionaryFull> {
        let code = self.encode(value)?;
        self.codes[index] = code;
        Ok(())
    }

    fn push(&mut self, value: &str) -> Result<(), DictionaryFull> {
        let code = self.encode(value)?;
        self.codes.push(code);
        Ok(())
    }

    fn clear(&mut self) {
        self.codes.clear();
        self.dictionary = DictionaryMap::new();
    }

    fn reserve(&mut self, additional: usize) {
        self.codes.reserve(additional);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.codes.try_reserve(additional)
    }

    fn sort(&mut self, descending: bool) {
        // Rank the distinct values once, then sort the ids by rank
        let mut by_value = self.dictionary.iter().collect::<Vec<_>>();
        by_value.sort_by(|(_, left), (_, right)| left.cmp(right));

        let mut rank = vec![0usize; by_value.len()];
        for (position, (code, _)) in by_value.into_iter().enumerate() {
            rank[code as usize] = position;
        }

        if descending {
            self.codes
                .sort_by(|&left, &right| rank[right as usize].cmp(&rank[left as usize]));
        } else {
            self.codes.sort_by_key(|&code| rank[code as usize]);
        }
    }

    fn iter(&self) -> TextIter<'_> {
        TextIter::Dictionary {
            codes: self.codes.iter(),
            dictionary: &self.dictionary,
        }
    }

    fn dictionary(&self) -> Option<&DictionaryMap> {
        Some(&self.dictionary)
    }
}

impl ByteSized for DictionaryEncoding {
    fn size_bytes(&self) -> u64 {
        size_of::<Self>() as u64 + size_inner_vec_flat(&self.codes) + self.dictionary.size_bytes()
    }
}
