//! Grouping operations producing a [`MapCollection`].
//!
//! Keys appear in the resulting map in the order they are first derived.

use super::Collection;
use crate::map::MapCollection;
use std::hash::Hash;

impl<T: Clone> Collection<T> {
    /// Buckets the elements by `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let ages = Collection::make([30, 25, 30]);
    /// let grouped = ages.group_by(|age| *age);
    /// assert_eq!(grouped.keys().all(), &[30, 25]);
    /// assert_eq!(grouped.get(&30).map(Collection::len), Some(2));
    /// ```
    pub fn group_by<K, F>(&self, mut key: F) -> MapCollection<K, Self>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut result = MapCollection::new();
        for item in &self.items {
            result
                .get_or_insert_with(key(item), Self::new)
                .push(item.clone());
        }
        result
    }

    /// Keys every element by `key`; the last element for a key wins.
    ///
    /// A key keeps the position where it was first derived.
    pub fn key_by<K, F>(&self, mut key: F) -> MapCollection<K, T>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut result = MapCollection::new();
        for item in &self.items {
            result.put(key(item), item.clone());
        }
        result
    }

    /// Builds a map from `(key, value)` pairs derived from every element.
    ///
    /// Later pairs overwrite earlier values for the same key.
    pub fn pluck_map<K, V, FV, FK>(&self, mut value: FV, mut key: FK) -> MapCollection<K, V>
    where
        K: Eq + Hash + Clone,
        FV: FnMut(&T) -> V,
        FK: FnMut(&T) -> K,
    {
        self.map_with_keys(|item, _| (key(item), value(item)))
    }
}

impl<T> Collection<T> {
    /// Counts the elements per derived key.
    pub fn count_by<K, F>(&self, mut key: F) -> MapCollection<K, usize>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut result = MapCollection::new();
        for item in &self.items {
            *result.get_or_insert_with(key(item), || 0) += 1;
        }
        result
    }

    /// Builds a map from the `(key, value)` pair `callback` derives for every element.
    ///
    /// Later pairs overwrite earlier values for the same key.
    pub fn map_with_keys<K, V, F>(&self, mut callback: F) -> MapCollection<K, V>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize) -> (K, V),
    {
        let mut result = MapCollection::new();
        for (index, item) in self.items.iter().enumerate() {
            let (key, value) = callback(item, index);
            result.put(key, value);
        }
        result
    }

    /// Builds a map collecting every value `callback` derives for a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let words = Collection::make(["apple", "bean", "avocado"]);
    /// let by_letter = words.map_to_dictionary(|word, _| (word.chars().next(), word.len()));
    /// assert_eq!(by_letter.get(&Some('a')), Some(&vec![5, 7]));
    /// ```
    pub fn map_to_dictionary<K, V, F>(&self, mut callback: F) -> MapCollection<K, Vec<V>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize) -> (K, V),
    {
        let mut result = MapCollection::new();
        for (index, item) in self.items.iter().enumerate() {
            let (key, value) = callback(item, index);
            result.get_or_insert_with(key, Vec::new).push(value);
        }
        result
    }

    /// Alias of [`Collection::map_to_dictionary`].
    pub fn map_to_groups<K, V, F>(&self, callback: F) -> MapCollection<K, Vec<V>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T, usize) -> (K, V),
    {
        self.map_to_dictionary(callback)
    }
}
