//! This module defines [PlainEncoding].

use std::{collections::TryReserveError, mem::size_of};

use crate::{
    bytesized::{size_inner_vec_flat, size_string_buffers, ByteSized},
    columnar::encoding::{DictionaryFull, Encoding, TextEncoding, TextIter},
};

/// Simple implementation of [TextEncoding] that uses Vec to store data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PlainEncoding {
    values: Vec<String>,
}

impl TextEncoding for PlainEncoding {
    fn kind(&self) -> Encoding {
        Encoding::Plain
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    fn set(&mut self, index: usize, value: &str) -> Result<(), DictionaryFull> {
        value.clone_into(&mut self.values[index]);
        Ok(())
    }

    fn push(&mut self, value: &str) -> Result<(), DictionaryFull> {
        self.values.push(value.to_string());
        Ok(())
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.values.try_reserve(additional)
    }

    fn sort(&mut self, descending: bool) {
        if descending {
            self.values.sort_by(|left, right| right.cmp(left));
        } else {
            self.values.sort();
        }
    }

    fn iter(&self) -> TextIter<'_> {
        TextIter::Plain(self.values.iter())
    }
}

impl ByteSized for PlainEncoding {
    fn size_bytes(&self) -> u64 {
        // We cast everything to u64 separately to avoid overflows
        size_of::<Self>() as u64 + size_inner_vec_flat(&self.values) + size_string_buffers(&self.values)
    }
}
