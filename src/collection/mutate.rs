//! In-place mutators.
//!
//! These are the only `Collection` operations that change the receiver.
//! Invalid indices never panic: they are ignored or yield `None`.

use super::Collection;
use crate::error::{CollectionError, Result};

impl<T> Collection<T> {
    /// Appends `item` to the end of the collection.
    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Appends every item of `items` to the end of the collection.
    pub fn push_many<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if the collection is empty.
    pub fn pop_or_fail(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(CollectionError::item_not_found)
    }

    /// Inserts `item` at the front of the collection.
    pub fn prepend(&mut self, item: T) -> &mut Self {
        self.items.insert(0, item);
        self
    }

    /// Inserts `items` at the front of the collection, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let mut collection = Collection::make([3, 4]);
    /// collection.prepend_many([1, 2]);
    /// assert_eq!(collection.all(), &[1, 2, 3, 4]);
    /// ```
    pub fn prepend_many<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.splice(0..0, items);
        self
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if the collection is empty.
    pub fn shift_or_fail(&mut self) -> Result<T> {
        self.shift().ok_or_else(CollectionError::item_not_found)
    }

    /// Replaces every element with the result of `callback(element, index)`.
    pub fn transform<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(&T, usize) -> T,
    {
        for (index, item) in self.items.iter_mut().enumerate() {
            let next = callback(item, index);
            *item = next;
        }
        self
    }

    /// Overwrites the element at `index`. Out-of-range indices are ignored.
    pub fn put(&mut self, index: usize, value: T) -> &mut Self {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = value;
        }
        self
    }

    /// Removes the elements at `indices`.
    ///
    /// Indices refer to positions before any removal takes place; they are
    /// removed from the highest to the lowest. Duplicates and out-of-range
    /// indices are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let mut collection = Collection::make(['a', 'b', 'c', 'd']);
    /// collection.forget(&[0, 2, 9]);
    /// assert_eq!(collection.all(), &['b', 'd']);
    /// ```
    pub fn forget(&mut self, indices: &[usize]) -> &mut Self {
        let mut ordered = indices.to_vec();
        ordered.sort_unstable_by(|left, right| right.cmp(left));
        ordered.dedup();
        for index in ordered {
            if index < self.items.len() {
                self.items.remove(index);
            }
        }
        self
    }

    /// Removes and returns the element at `index`.
    pub fn pull(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes a range and returns it as a new collection.
    ///
    /// A negative `offset` counts from the end. `length` defaults to the rest
    /// of the collection and is clamped to the available elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let mut collection = Collection::make([1, 2, 3, 4, 5]);
    /// let removed = collection.splice(1, Some(2));
    /// assert_eq!(removed.all(), &[2, 3]);
    /// assert_eq!(collection.all(), &[1, 4, 5]);
    /// ```
    pub fn splice(&mut self, offset: isize, length: Option<usize>) -> Self {
        let range = self.splice_range(offset, length);
        Self::from_vec(self.items.drain(range).collect())
    }

    /// Removes a range, inserts `replacement` in its place and returns the removed range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let mut collection = Collection::make([1, 2, 3, 4]);
    /// let removed = collection.splice_replace(1, 2, [20, 30, 40]);
    /// assert_eq!(removed.all(), &[2, 3]);
    /// assert_eq!(collection.all(), &[1, 20, 30, 40, 4]);
    /// ```
    pub fn splice_replace<I>(&mut self, offset: isize, length: usize, replacement: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let range = self.splice_range(offset, Some(length));
        Self::from_vec(self.items.splice(range, replacement).collect())
    }

    fn splice_range(&self, offset: isize, length: Option<usize>) -> std::ops::Range<usize> {
        let total = self.items.len();
        let start = resolve_offset(offset, total).min(total);
        let available = total - start;
        let count = length.map_or(available, |length| length.min(available));
        start..start + count
    }
}

/// Converts a possibly negative offset into an absolute start position.
///
/// Negative offsets count back from `total`, saturating at zero.
pub(super) fn resolve_offset(offset: isize, total: usize) -> usize {
    if offset < 0 {
        total.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs()
    }
}
