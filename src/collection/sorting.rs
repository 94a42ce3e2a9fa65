//! Sorting.
//!
//! All sorts return a new collection. `sort_by`, `sort_by_desc`,
//! `sort_stable_func` and `sort_by_keys` are stable: elements comparing equal
//! keep their relative input order, so multi-pass sort chains are
//! deterministic.

use super::Collection;
use std::cmp::Ordering;
use std::fmt;

/// One key of a multi-key sort, with its direction.
///
/// # Examples
///
/// ```rust
/// use collecta::{Collection, SortKey};
///
/// type Person = (&'static str, u32);
///
/// let people: Collection<Person> = Collection::make([("Bob", 30), ("Ann", 30), ("Cid", 25)]);
/// let sorted = people.sort_by_keys(&[
///     SortKey::descending(|person: &Person| person.1),
///     SortKey::ascending(|person: &Person| person.0),
/// ]);
/// assert_eq!(sorted.all(), &[("Ann", 30), ("Bob", 30), ("Cid", 25)]);
/// ```
pub struct SortKey<'a, T> {
    comparator: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
}

impl<'a, T> SortKey<'a, T> {
    /// Sorts by `key` in ascending order.
    pub fn ascending<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            comparator: Box::new(move |left, right| key(left).cmp(&key(right))),
        }
    }

    /// Sorts by `key` in descending order.
    pub fn descending<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            comparator: Box::new(move |left, right| key(right).cmp(&key(left))),
        }
    }

    /// Sorts by `key`, descending when `descending` is `true`.
    pub fn new<K, F>(key: F, descending: bool) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        if descending {
            Self::descending(key)
        } else {
            Self::ascending(key)
        }
    }

    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.comparator)(left, right)
    }
}

impl<T> fmt::Debug for SortKey<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SortKey").finish_non_exhaustive()
    }
}

impl<T: Clone> Collection<T> {
    /// Sorts with `compare`. The sort is not guaranteed to be stable.
    pub fn sort_func<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut result = self.items.clone();
        result.sort_unstable_by(compare);
        Self::from_vec(result)
    }

    /// Sorts stably with `compare`.
    pub fn sort_stable_func<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut result = self.items.clone();
        result.sort_by(compare);
        Self::from_vec(result)
    }

    /// Sorts stably by the key extracted with `key`, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let pairs = Collection::make([(1, "b"), (0, "z"), (1, "a")]);
    /// let sorted = pairs.sort_by(|pair| pair.0);
    /// assert_eq!(sorted.all(), &[(0, "z"), (1, "b"), (1, "a")]);
    /// ```
    pub fn sort_by<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_stable_func(|left, right| key(left).cmp(&key(right)))
    }

    /// Sorts stably by the key extracted with `key`, descending.
    pub fn sort_by_desc<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_stable_func(|left, right| key(right).cmp(&key(left)))
    }

    /// Sorts stably by several keys; later keys break ties of earlier ones.
    ///
    /// With no keys the original order is kept.
    #[must_use]
    pub fn sort_by_keys(&self, keys: &[SortKey<'_, T>]) -> Self {
        self.sort_stable_func(|left, right| {
            keys.iter()
                .map(|key| key.compare(left, right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl<T: Clone + Ord> Collection<T> {
    /// Sorts the elements in ascending order.
    #[must_use]
    pub fn sort(&self) -> Self {
        let mut result = self.items.clone();
        result.sort();
        Self::from_vec(result)
    }

    /// Sorts the elements in descending order.
    #[must_use]
    pub fn sort_desc(&self) -> Self {
        self.sort_stable_func(|left, right| right.cmp(left))
    }
}
