//! Ordered, index-addressable collection with a fluent API.
//!
//! [`Collection`] owns a single `Vec<T>` and exposes a chainable set of
//! operations over it. Operations fall into two families:
//!
//! - **Copy-on-transform**: `filter`, `slice`, `sort`, `map`, ... take `&self`
//!   and return a new collection with its own storage. The receiver is left
//!   unchanged.
//! - **In-place**: `push`, `pop`, `prepend`, `shift`, `put`, `forget`, `pull`,
//!   `transform`, `splice` take `&mut self` and mutate the receiver.
//!
//! Accessors come in a safe form returning `Option` or a default and a fail
//! form (`*_or_fail`, `sole*`) returning a [`Result`](crate::Result).
//!
//! # Examples
//!
//! ```rust
//! use collecta::Collection;
//!
//! let numbers = Collection::make([5, 3, 8, 1, 4]);
//!
//! let result = numbers.filter(|n| n % 2 == 0).sort().map(|n, _| n * 10);
//! assert_eq!(result.all(), &[40, 80]);
//!
//! // The source collection is untouched
//! assert_eq!(numbers.all(), &[5, 3, 8, 1, 4]);
//!
//! // In-place mutation
//! let mut stack = Collection::make([1, 2]);
//! stack.push(3).prepend(0);
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.all(), &[0, 1, 2]);
//! ```

mod access;
mod aggregate;
mod grouping;
mod mutate;
mod random;
mod set_ops;
mod sorting;
mod transform;

pub use sorting::SortKey;

use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Collection Definition
// =============================================================================

/// An ordered sequence of elements with a fluent API.
///
/// # Type Parameters
///
/// * `T` - The element type. Most copy-producing operations require `T: Clone`.
///
/// # Examples
///
/// ```rust
/// use collecta::Collection;
///
/// let collection: Collection<i32> = (1..=5).collect();
/// assert_eq!(collection.len(), 5);
/// assert_eq!(collection.first(), Some(&1));
/// ```
#[derive(Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Alias of [`Collection::new`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a collection that takes ownership of `items`.
    #[inline]
    #[must_use]
    pub const fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Creates a collection from a fixed list of values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let collection = Collection::make(["a", "b"]);
    /// assert_eq!(collection.all(), &["a", "b"]);
    /// ```
    #[must_use]
    pub fn make<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Creates a collection by invoking `generator` `count` times.
    ///
    /// The generator receives the 1-based iteration number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let squares = Collection::times(4, |n| n * n);
    /// assert_eq!(squares.all(), &[1, 4, 9, 16]);
    /// ```
    #[must_use]
    pub fn times<F>(count: usize, generator: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            items: (1..=count).map(generator).collect(),
        }
    }

    /// Returns the underlying elements as a slice.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Consumes the collection and returns the underlying vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`Collection::len`].
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the collection contains at least one element.
    #[inline]
    #[must_use]
    pub const fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns `true` if the collection contains exactly one element.
    #[inline]
    #[must_use]
    pub const fn contains_one_item(&self) -> bool {
        self.items.len() == 1
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `callback` with every element and its index.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            callback(item, index);
        }
        self
    }

    /// Calls `callback` with every element until it returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let mut seen = Vec::new();
    /// Collection::make([1, 2, 3, 4]).each_while(|item, _| {
    ///     seen.push(*item);
    ///     *item < 2
    /// });
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn each_while<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !callback(item, index) {
                break;
            }
        }
        self
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Alias of [`Collection::contains`].
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.contains(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty collection satisfies every predicate.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Passes the collection to `callback` and returns it unchanged.
    pub fn tap<F>(&self, callback: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        callback(self);
        self
    }

    /// Passes the collection to `callback` and returns its result.
    pub fn pipe<U, F>(&self, callback: F) -> U
    where
        F: FnOnce(&Self) -> U,
    {
        callback(self)
    }

    /// Emits the collection as a `tracing` debug event and returns it.
    ///
    /// The event is recorded under the `collecta::dump` target.
    pub fn dump(&self) -> &Self
    where
        T: fmt::Debug,
    {
        tracing::debug!(target: "collecta::dump", length = self.items.len(), items = ?self.items);
        self
    }
}

impl Collection<i64> {
    /// Creates a collection of consecutive integers from `from` to `to`, inclusive.
    ///
    /// The range descends when `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// assert_eq!(Collection::range(1, 4).all(), &[1, 2, 3, 4]);
    /// assert_eq!(Collection::range(3, 1).all(), &[3, 2, 1]);
    /// ```
    #[must_use]
    pub fn range(from: i64, to: i64) -> Self {
        if from > to {
            Self::from_vec((to..=from).rev().collect())
        } else {
            Self::from_vec((from..=to).collect())
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::make(items)
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    #[inline]
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::make(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T: Hash> Hash for Collection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.items {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Collection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

#[cfg(feature = "json")]
impl<T: serde::Serialize> Collection<T> {
    /// Serializes the collection to a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if an element fails to serialize.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Serializes the collection to a JSON array, falling back to `"[]"`.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().unwrap_or_else(|_| "[]".to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
