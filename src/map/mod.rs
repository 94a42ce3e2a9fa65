//! Insertion-ordered key-value container.
//!
//! [`MapCollection`] keeps its entries in a `Vec<(K, V)>` that defines the
//! enumeration order, plus a hash index from key to slot. Every insertion and
//! removal updates both together, so lookups stay O(1) while iteration,
//! `Display` and JSON output follow insertion order.
//!
//! The index hasher is selected by Cargo feature:
//!
//! | Feature  | Hasher                       |
//! |----------|------------------------------|
//! | (none)   | `std` `RandomState`          |
//! | `fxhash` | `rustc_hash::FxBuildHasher`  |
//! | `ahash`  | `ahash::RandomState`         |
//!
//! # Examples
//!
//! ```rust
//! use collecta::MapCollection;
//!
//! let mut scores = MapCollection::new();
//! scores.put("bob", 3).put("ann", 5).put("bob", 4);
//!
//! assert_eq!(scores.keys().all(), &["bob", "ann"]);
//! assert_eq!(scores.get(&"bob"), Some(&4));
//! assert_eq!(scores.to_string(), "{bob: 4, ann: 5}");
//! ```

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "fxhash")]
type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type IndexHasher = std::collections::hash_map::RandomState;

// =============================================================================
// MapCollection Definition
// =============================================================================

/// A map that remembers the order in which keys were first inserted.
///
/// # Type Parameters
///
/// * `K` - The key type. Keys are cloned into the hash index.
/// * `V` - The value type.
#[derive(Clone)]
pub struct MapCollection<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize, IndexHasher>,
}

impl<K: Eq + Hash + Clone, V> MapCollection<K, V> {
    /// Creates a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::with_hasher(IndexHasher::default()),
        }
    }

    /// Creates a map from a `HashMap`.
    ///
    /// The resulting order is the source map's iteration order, which is not
    /// deterministic. Use [`MapCollection::from_ordered`] to fix it.
    #[must_use]
    pub fn from_map<S>(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }

    /// Creates a map from a `HashMap` and an explicit key order.
    ///
    /// Keys in `keys` that are missing from `map` are skipped. Entries of
    /// `map` not named in `keys` are appended afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::MapCollection;
    /// use std::collections::HashMap;
    ///
    /// let source = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let ordered = MapCollection::from_ordered(source, &["c", "x", "a", "b"]);
    /// assert_eq!(ordered.keys().all(), &["c", "a", "b"]);
    /// ```
    #[must_use]
    pub fn from_ordered<S>(mut map: HashMap<K, V, S>, keys: &[K]) -> Self
    where
        S: BuildHasher,
    {
        let mut result = Self::new();
        for key in keys {
            if let Some(value) = map.remove(key) {
                result.put(key.clone(), value);
            }
        }
        result.extend(map);
        result
    }

    /// Creates a map from `(key, value)` pairs. Later pairs overwrite earlier
    /// values while keeping the first position.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`MapCollection::len`].
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map has at least one entry.
    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns an iterator over `(key, value)` references in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if the key is absent.
    pub fn get_or_fail(&self, key: &K) -> Result<&V> {
        self.get(key)
            .ok_or_else(|| CollectionError::item_not_found_with("key not found"))
    }

    /// Returns `true` if every key in `keys` is present.
    #[must_use]
    pub fn has(&self, keys: &[K]) -> bool {
        keys.iter().all(|key| self.index.contains_key(key))
    }

    /// Returns `true` if at least one key in `keys` is present.
    #[must_use]
    pub fn has_any(&self, keys: &[K]) -> bool {
        keys.iter().any(|key| self.index.contains_key(key))
    }

    /// Inserts or overwrites `key`.
    ///
    /// New keys are appended; existing keys keep their position.
    pub fn put(&mut self, key: K, value: V) -> &mut Self {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
        self
    }

    /// Returns a mutable reference to the value under `key`, inserting the
    /// result of `default` first if the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = if let Some(&slot) = self.index.get(&key) {
            slot
        } else {
            let slot = self.entries.len();
            self.index.insert(key.clone(), slot);
            self.entries.push((key, default()));
            slot
        };
        &mut self.entries[slot].1
    }

    /// Returns the value under `key`, storing `default` first if it is absent.
    pub fn get_or_put(&mut self, key: K, default: V) -> &V {
        self.get_or_insert_with(key, || default)
    }

    /// Removes every key in `keys`. Absent keys are ignored.
    pub fn forget(&mut self, keys: &[K]) -> &mut Self {
        let removed: HashSet<&K> = keys.iter().collect();
        self.entries.retain(|(key, _)| !removed.contains(key));
        self.reindex();
        self
    }

    /// Removes `key` and returns its value.
    pub fn pull(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for (position, (key, _)) in self.entries.iter().enumerate().skip(slot) {
            self.index.insert(key.clone(), position);
        }
        Some(value)
    }

    /// Returns the first key in insertion order.
    #[must_use]
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// Returns the last key in insertion order.
    #[must_use]
    pub fn last_key(&self) -> Option<&K> {
        self.entries.last().map(|(key, _)| key)
    }

    /// Returns the first value in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Returns the last value in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Calls `callback` with every entry in order.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in &self.entries {
            callback(key, value);
        }
        self
    }

    /// Calls `callback` with every entry until it returns `false`.
    pub fn each_while<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in &self.entries {
            if !callback(key, value) {
                break;
            }
        }
        self
    }

    /// Returns a map with every value replaced by `callback(value, key)`.
    pub fn map_values<U, F>(&self, mut callback: F) -> MapCollection<K, U>
    where
        F: FnMut(&V, &K) -> U,
    {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), callback(value, key)))
            .collect()
    }

    /// Returns `true` if any entry satisfies `predicate`.
    pub fn contains<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.entries.iter().any(|(key, value)| predicate(value, key))
    }

    /// Returns `true` if every entry satisfies `predicate`.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.entries.iter().all(|(key, value)| predicate(value, key))
    }

    /// Folds the entries in order.
    pub fn reduce<U, F>(&self, initial: U, mut callback: F) -> U
    where
        F: FnMut(U, &V, &K) -> U,
    {
        self.entries
            .iter()
            .fold(initial, |accumulator, (key, value)| callback(accumulator, value, key))
    }

    /// Passes the map to `callback` and returns it unchanged.
    pub fn tap<F>(&self, callback: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        callback(self);
        self
    }

    /// Applies `callback` when `condition` holds.
    pub fn when<F>(self, condition: bool, callback: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { callback(self) } else { self }
    }

    /// Emits the map as a `tracing` debug event and returns it.
    pub fn dump(&self) -> &Self
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        tracing::debug!(target: "collecta::dump", length = self.entries.len(), entries = ?self);
        self
    }

    /// Consumes the map and returns its entries in insertion order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(K, V)> {
        self.entries
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), position);
        }
    }
}

// =============================================================================
// Copy-on-transform Operations
// =============================================================================

impl<K: Eq + Hash + Clone, V: Clone> MapCollection<K, V> {
    /// Creates a map pairing `keys` with `values` positionally.
    ///
    /// Extra keys or values beyond the shorter collection are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::{Collection, MapCollection};
    ///
    /// let keys = Collection::make(["a", "b", "c"]);
    /// let values = Collection::make([1, 2]);
    /// let combined = MapCollection::combine(&keys, &values);
    /// assert_eq!(combined.to_string(), "{a: 1, b: 2}");
    /// ```
    #[must_use]
    pub fn combine(keys: &Collection<K>, values: &Collection<V>) -> Self {
        keys.iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect()
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Collection<K> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns the values in insertion order.
    #[must_use]
    pub fn values(&self) -> Collection<V> {
        self.entries.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the value under `key`, or `default` if it is absent.
    #[must_use]
    pub fn get_or(&self, key: &K, default: V) -> V {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Returns the entries satisfying `predicate`, keeping their order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.entries
            .iter()
            .filter(|(key, value)| predicate(value, key))
            .cloned()
            .collect()
    }

    /// Returns the entries not satisfying `predicate`, keeping their order.
    pub fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.filter(|value, key| !predicate(value, key))
    }

    /// Returns only the entries whose key is in `keys`, in this map's order.
    #[must_use]
    pub fn only(&self, keys: &[K]) -> Self {
        let wanted: HashSet<&K> = keys.iter().collect();
        self.filter(|_, key| wanted.contains(key))
    }

    /// Returns the entries whose key is not in `keys`.
    #[must_use]
    pub fn except(&self, keys: &[K]) -> Self {
        let excluded: HashSet<&K> = keys.iter().collect();
        self.filter(|_, key| !excluded.contains(key))
    }

    /// Merges `others` into a copy of this map.
    ///
    /// Later values override earlier ones; keys new to the result are appended
    /// in the order they appear.
    #[must_use]
    pub fn merge(&self, others: &[&Self]) -> Self {
        let mut result = self.clone();
        for other in others {
            for (key, value) in &other.entries {
                result.put(key.clone(), value.clone());
            }
        }
        result
    }

    /// Adds the entries of `other` whose keys are absent here.
    ///
    /// Existing values win.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (key, value) in &other.entries {
            if !result.index.contains_key(key) {
                result.put(key.clone(), value.clone());
            }
        }
        result
    }

    /// Returns the entries whose keys are absent from `other`.
    #[must_use]
    pub fn diff_keys(&self, other: &Self) -> Self {
        self.filter(|_, key| !other.index.contains_key(key))
    }

    /// Returns the entries whose keys are also present in `other`.
    #[must_use]
    pub fn intersect_by_keys(&self, other: &Self) -> Self {
        self.filter(|_, key| other.index.contains_key(key))
    }

    /// Returns the entries as a collection of pairs, in insertion order.
    #[must_use]
    pub fn to_pairs(&self) -> Collection<(K, V)> {
        Collection::from_vec(self.entries.clone())
    }
}

impl<K: Eq + Hash + Clone + Ord, V: Clone> MapCollection<K, V> {
    /// Returns a copy ordered by ascending key.
    #[must_use]
    pub fn sort_keys(&self) -> Self {
        let mut result = self.clone();
        result.entries.sort_by(|left, right| left.0.cmp(&right.0));
        result.reindex();
        result
    }

    /// Returns a copy ordered by descending key.
    #[must_use]
    pub fn sort_keys_desc(&self) -> Self {
        let mut result = self.clone();
        result.entries.sort_by(|left, right| right.0.cmp(&left.0));
        result.reindex();
        result
    }
}

impl MapCollection<String, String> {
    /// Swaps keys and values.
    ///
    /// When several keys share a value, the last of them wins.
    #[must_use]
    pub fn flip(&self) -> Self {
        self.entries
            .iter()
            .map(|(key, value)| (value.clone(), key.clone()))
            .collect()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over the entries of a [`MapCollection`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Eq + Hash + Clone, V> Default for MapCollection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for MapCollection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for MapCollection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> IntoIterator for MapCollection<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a MapCollection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Equality is order-sensitive: two maps are equal when they hold the same
/// entries in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for MapCollection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for MapCollection<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapCollection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapCollection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in &self.entries {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for MapCollection<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct MapCollectionVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for MapCollectionVisitor<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash + Clone,
    V: serde::Deserialize<'de>,
{
    type Value = MapCollection<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = MapCollection::new();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for MapCollection<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash + Clone,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(MapCollectionVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "json")]
impl<K: serde::Serialize, V: serde::Serialize> MapCollection<K, V> {
    /// Serializes the map to a JSON object in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a key is not representable as a JSON
    /// object key or a value fails to serialize.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the map to a JSON object, falling back to `"{}"`.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().unwrap_or_else(|_| "{}".to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> MapCollection<String, i32> {
        MapCollection::from_pairs([
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
        ])
    }

    fn key(name: &str) -> String {
        name.to_string()
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_new_is_empty() {
        let map: MapCollection<String, i32> = MapCollection::new();
        assert!(map.is_empty());
        assert_eq!(map.first_key(), None);
        assert_eq!(map.to_string(), "{}");
    }

    #[rstest]
    fn test_from_map_holds_every_entry() {
        let source = HashMap::from([(1, 'x'), (2, 'y')]);
        let map = MapCollection::from_map(source);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&'y'));
    }

    #[rstest]
    fn test_from_ordered_appends_unnamed_entries() {
        let source = HashMap::from([("a", 1), ("b", 2)]);
        let map = MapCollection::from_ordered(source, &["b"]);
        assert_eq!(map.keys().all(), &["b", "a"]);
    }

    #[rstest]
    fn test_combine_truncates_to_shorter() {
        let keys = Collection::make(["x", "y"]);
        let values = Collection::make([1, 2, 3]);
        let map = MapCollection::combine(&keys, &values);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"y"), Some(&2));
    }

    // =========================================================================
    // Query Tests
    // =========================================================================

    #[rstest]
    fn test_get_family() {
        let map = letters();
        assert_eq!(map.get(&key("b")), Some(&2));
        assert_eq!(map.get_or(&key("z"), 9), 9);
        assert!(map.get_or_fail(&key("z")).unwrap_err().is_item_not_found());
        assert_eq!(map.get_or_fail(&key("a")), Ok(&1));
    }

    #[rstest]
    #[case(vec!["a", "b"], true, true)]
    #[case(vec!["a", "z"], false, true)]
    #[case(vec!["y", "z"], false, false)]
    #[case(vec![], true, false)]
    fn test_has_and_has_any(
        #[case] keys: Vec<&str>,
        #[case] expected_all: bool,
        #[case] expected_any: bool,
    ) {
        let keys: Vec<String> = keys.into_iter().map(key).collect();
        let map = letters();
        assert_eq!(map.has(&keys), expected_all);
        assert_eq!(map.has_any(&keys), expected_any);
    }

    #[rstest]
    fn test_first_and_last() {
        let map = letters();
        assert_eq!(map.first_key(), Some(&key("a")));
        assert_eq!(map.last_key(), Some(&key("c")));
        assert_eq!(map.first(), Some(&1));
        assert_eq!(map.last(), Some(&3));
    }

    // =========================================================================
    // Mutation Tests
    // =========================================================================

    #[rstest]
    fn test_put_keeps_position_of_existing_key() {
        let mut map = letters();
        map.put(key("a"), 10).put(key("d"), 4);
        assert_eq!(map.to_string(), "{a: 10, b: 2, c: 3, d: 4}");
    }

    #[rstest]
    fn test_pull_keeps_index_consistent() {
        let mut map = letters();
        assert_eq!(map.pull(&key("a")), Some(1));
        assert_eq!(map.pull(&key("a")), None);
        assert_eq!(map.get(&key("c")), Some(&3));
        map.put(key("c"), 30);
        assert_eq!(map.to_string(), "{b: 2, c: 30}");
    }

    #[rstest]
    fn test_forget_removes_and_reindexes() {
        let mut map = letters();
        map.forget(&[key("b"), key("missing")]);
        assert_eq!(map.keys().all(), &[key("a"), key("c")]);
        assert_eq!(map.get(&key("c")), Some(&3));
        assert!(!map.has(&[key("b")]));
    }

    #[rstest]
    fn test_get_or_put() {
        let mut map = letters();
        assert_eq!(*map.get_or_put(key("a"), 100), 1);
        assert_eq!(*map.get_or_put(key("z"), 26), 26);
        assert_eq!(map.last_key(), Some(&key("z")));
    }

    // =========================================================================
    // Transformation Tests
    // =========================================================================

    #[rstest]
    fn test_filter_reject_only_except() {
        let map = letters();
        assert_eq!(map.filter(|value, _| *value > 1).keys().all(), &[key("b"), key("c")]);
        assert_eq!(map.reject(|value, _| *value > 1).keys().all(), &[key("a")]);
        assert_eq!(map.only(&[key("c"), key("a")]).keys().all(), &[key("a"), key("c")]);
        assert_eq!(map.except(&[key("a")]).keys().all(), &[key("b"), key("c")]);
    }

    #[rstest]
    fn test_merge_overrides_and_appends() {
        let base = letters();
        let other = MapCollection::from_pairs([(key("b"), 20), (key("d"), 4)]);
        let last = MapCollection::from_pairs([(key("d"), 40)]);
        let merged = base.merge(&[&other, &last]);
        assert_eq!(merged.to_string(), "{a: 1, b: 20, c: 3, d: 40}");
        assert_eq!(base.get(&key("b")), Some(&2));
    }

    #[rstest]
    fn test_union_keeps_existing_values() {
        let other = MapCollection::from_pairs([(key("b"), 20), (key("d"), 4)]);
        assert_eq!(letters().union(&other).to_string(), "{a: 1, b: 2, c: 3, d: 4}");
    }

    #[rstest]
    fn test_diff_and_intersect_keys() {
        let other = MapCollection::from_pairs([(key("b"), 0), (key("z"), 0)]);
        assert_eq!(letters().diff_keys(&other).keys().all(), &[key("a"), key("c")]);
        assert_eq!(letters().intersect_by_keys(&other).keys().all(), &[key("b")]);
    }

    #[rstest]
    fn test_sort_keys() {
        let map = MapCollection::from_pairs([(3, 'c'), (1, 'a'), (2, 'b')]);
        assert_eq!(map.sort_keys().keys().all(), &[1, 2, 3]);
        assert_eq!(map.sort_keys_desc().keys().all(), &[3, 2, 1]);
        assert_eq!(map.sort_keys().get(&3), Some(&'c'));
    }

    #[rstest]
    fn test_map_values_and_reduce() {
        let doubled = letters().map_values(|value, _| value * 2);
        assert_eq!(doubled.values().all(), &[2, 4, 6]);
        let joined = letters().reduce(String::new(), |mut accumulator, value, key| {
            accumulator.push_str(&format!("{key}{value}"));
            accumulator
        });
        assert_eq!(joined, "a1b2c3");
    }

    #[rstest]
    fn test_contains_and_every() {
        let map = letters();
        assert!(map.contains(|value, _| *value == 2));
        assert!(map.every(|value, _| *value > 0));
        assert!(!map.every(|_, key| key == "a"));
    }

    #[rstest]
    fn test_flip_last_key_wins() {
        let map = MapCollection::from_pairs([
            (key("one"), key("1")),
            (key("uno"), key("1")),
            (key("two"), key("2")),
        ]);
        let flipped = map.flip();
        assert_eq!(flipped.get(&key("1")), Some(&key("uno")));
        assert_eq!(flipped.keys().all(), &[key("1"), key("2")]);
    }

    #[rstest]
    fn test_to_pairs_round_trip() {
        let map = letters();
        let rebuilt = MapCollection::from_pairs(map.to_pairs());
        assert_eq!(rebuilt, map);
    }

    #[rstest]
    fn test_equality_is_order_sensitive() {
        let left = MapCollection::from_pairs([(1, 'a'), (2, 'b')]);
        let right = MapCollection::from_pairs([(2, 'b'), (1, 'a')]);
        assert_ne!(left, right);
        assert_eq!(left, right.sort_keys());
    }

    #[rstest]
    fn test_debug_format() {
        let map = MapCollection::from_pairs([("k", 1)]);
        assert_eq!(format!("{map:?}"), r#"{"k": 1}"#);
    }

    #[rstest]
    fn test_iter_in_insertion_order() {
        let map = letters();
        let collected: Vec<(&String, &i32)> = map.iter().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0], (&key("a"), &1));
        assert_eq!(map.iter().next_back(), Some((&key("c"), &3)));
    }
}
