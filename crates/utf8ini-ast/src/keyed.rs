//! Insertion-ordered map with a configurable key comparison
//!
//! Entries are stored in an `IndexMap` keyed by the normalized name, so
//! lookups are hashed while iteration follows first-insertion order. The
//! entry itself keeps the name as it was first written.

use indexmap::IndexMap;

use crate::comparison::NameComparison;

/// Ordered collection of named entries
#[derive(Debug, Clone)]
pub struct KeyedMap<T> {
    comparison: NameComparison,
    entries: IndexMap<String, T>,
}

impl<T> KeyedMap<T> {
    /// Create an empty map using the given comparison
    pub fn new(comparison: NameComparison) -> Self {
        Self {
            comparison,
            entries: IndexMap::new(),
        }
    }

    /// The comparison used for lookups
    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(self.comparison.normalize(name).as_ref())
    }

    /// Look up an entry by name for modification
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let key = self.comparison.normalize(name);
        self.entries.get_mut(key.as_ref())
    }

    /// Check whether an entry exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .contains_key(self.comparison.normalize(name).as_ref())
    }

    /// Return the entry for `name`, appending one built by `make` if absent
    ///
    /// An existing entry keeps its position.
    pub fn get_or_insert_with<F>(&mut self, name: &str, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let key = self.comparison.normalize(name).into_owned();
        self.entries.entry(key).or_insert_with(make)
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let key = self.comparison.normalize(name);
        self.entries.shift_remove(key.as_ref())
    }

    /// Iterate entries in insertion order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries.values()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
