//! Equality-based set operations and searches.

use super::Collection;
use std::collections::HashSet;
use std::hash::Hash;

impl<T: PartialEq> Collection<T> {
    /// Returns `true` if the collection holds an element equal to `value`.
    #[must_use]
    pub fn contains_item(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().rposition(|item| item == value)
    }
}

impl<T: Clone + Eq + Hash> Collection<T> {
    /// Returns the elements not present in `other`, keeping their order.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        let excluded: HashSet<&T> = other.items.iter().collect();
        self.filter(|item| !excluded.contains(item))
    }

    /// Returns the elements also present in `other`, keeping their order.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let included: HashSet<&T> = other.items.iter().collect();
        self.filter(|item| included.contains(item))
    }

    /// Returns each repeated value once, in the order of its second occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let collection = Collection::make(["b", "a", "a", "b", "b", "c"]);
    /// assert_eq!(collection.duplicates().all(), &["a", "b"]);
    /// ```
    #[must_use]
    pub fn duplicates(&self) -> Self {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.filter(|item| !seen.insert(item.clone()) && reported.insert(item.clone()))
    }

    /// Returns the distinct elements, keeping first occurrences.
    #[must_use]
    pub fn unique(&self) -> Self {
        self.unique_by(Clone::clone)
    }
}
