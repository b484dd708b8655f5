//! This module provides the dictionary used by dictionary-encoded columns.
//! A dictionary assigns numeric ids to distinct strings,
//! and provides a bijective (invertible) mapping between the two.

use std::mem::size_of;

use hashbrown::HashMap;

use crate::bytesized::{size_inner_hashmap_flat, size_inner_vec_flat, size_string_buffers, ByteSized};

/// Result of adding new values to a dictionary.
/// It indicates if the operation was successful, and whether the value was previously present or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    /// Element was new and has been freshly assinged the given id.
    Fresh(u32),
    /// Element was already known and has the given id.
    Known(u32),
    /// Element could not be assigned an id since the id space is exhausted.
    Rejected,
}

impl AddResult {
    /// Returns the id of the element, unless it was rejected.
    pub fn id(&self) -> Option<u32> {
        match self {
            AddResult::Fresh(id) | AddResult::Known(id) => Some(*id),
            AddResult::Rejected => None,
        }
    }
}

/// A hashmap-based bijection between strings and `u32` ids.
/// Ids are assigned in insertion order, starting at zero.
/// Entries are never removed, so ids stay valid for the lifetime of the map.
#[derive(Debug, Clone, Default)]
pub struct DictionaryMap {
    values: Vec<String>,
    ids: HashMap<String, u32>,
}

impl DictionaryMap {
    /// Construct a new and empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string to the dictionary. If the string is not known yet, it will
    /// be assigned a new id.
    pub fn add_str(&mut self, string: &str) -> AddResult {
        if let Some(&id) = self.ids.get(string) {
            return AddResult::Known(id);
        }

        let Ok(id) = u32::try_from(self.values.len()) else {
            return AddResult::Rejected;
        };

        log::trace!("dictionary: assigning id {id} to {string:?}");

        self.values.push(string.to_string());
        self.ids.insert(string.to_string(), id);
        AddResult::Fresh(id)
    }

    /// Looks for a given [&str] slice and returns `Some(id)` if it is in the dictionary, and `None` otherwise.
    pub fn fetch_id(&self, string: &str) -> Option<u32> {
        self.ids.get(string).copied()
    }

    /// Returns the string associated with the `id` or `None` if the `id` is out of bounds.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.values.get(id as usize).map(String::as_str)
    }

    /// Returns the number of elements in the dictionary.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the dictionary has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all pairs of id and string, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        (0u32..).zip(self.values.iter().map(String::as_str))
    }
}

impl ByteSized for DictionaryMap {
    fn size_bytes(&self) -> u64 {
        // Every string is stored twice, once in the vector and once as a map key
        size_of::<Self>() as u64
            + size_inner_vec_flat(&self.values)
            + size_inner_hashmap_flat(&self.ids)
            + 2 * size_string_buffers(&self.values)
    }
}

#[cfg(test)]
mod test {
    use super::{AddResult, DictionaryMap};

    fn create_dict() -> DictionaryMap {
        let mut dict = DictionaryMap::new();
        let vec: Vec<&str> = vec![
            "a",
            "b",
            "c",
            "a",
            "b",
            "c",
            "Position 3",
            "Position 4",
            "Position 3",
            "Position 5",
        ];

        for i in vec {
            dict.add_str(i);
        }
        dict
    }

    #[test]
    fn get() {
        let dict = create_dict();

        assert_eq!(dict.get(0), Some("a"));
        assert_eq!(dict.get(1), Some("b"));
        assert_eq!(dict.get(2), Some("c"));
        assert_eq!(dict.get(3), Some("Position 3"));
        assert_eq!(dict.get(4), Some("Position 4"));
        assert_eq!(dict.get(5), Some("Position 5"));
        assert_eq!(dict.get(6), None);
        assert_eq!(dict.len(), 6);
    }

    #[test]
    fn fetch_id() {
        let dict = create_dict();
        assert_eq!(dict.fetch_id("a"), Some(0));
        assert_eq!(dict.fetch_id("Position 5"), Some(5));
        assert_eq!(dict.fetch_id("d"), None);
        assert_eq!(dict.fetch_id("Pos"), None);
    }

    #[test]
    fn add() {
        let mut dict = create_dict();
        assert_eq!(dict.add_str("a"), AddResult::Known(0));
        assert_eq!(dict.add_str("new value"), AddResult::Fresh(6));
        assert_eq!(dict.add_str("new value").id(), Some(6));
    }

    #[test]
    fn empty_str() {
        let mut dict = DictionaryMap::new();
        assert_eq!(dict.add_str(""), AddResult::Fresh(0));
        assert_eq!(dict.get(0), Some(""));
        assert_eq!(dict.fetch_id(""), Some(0));
    }

    #[test]
    fn iter_in_id_order() {
        let dict = create_dict();
        let entries = dict.iter().take(3).collect::<Vec<_>>();
        assert_eq!(entries, vec![(0, "a"), (1, "b"), (2, "c")]);
    }
}
