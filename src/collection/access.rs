//! Positional and predicate lookups.
//!
//! Every lookup exists in up to three forms: one returning `Option`, one
//! falling back to a caller-supplied default (`*_or`), and one reporting a
//! [`CollectionError`] (`*_or_fail`).

use super::Collection;
use crate::error::{CollectionError, Result};

impl<T> Collection<T> {
    /// Returns the first element, or `None` if the collection is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if the collection is empty.
    pub fn first_or_fail(&self) -> Result<&T> {
        self.items.first().ok_or_else(CollectionError::item_not_found)
    }

    /// Returns the first element satisfying `predicate`.
    pub fn first_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if no element matches.
    pub fn first_where_or_fail<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.first_where(predicate)
            .ok_or_else(CollectionError::item_not_found)
    }

    /// Returns the last element, or `None` if the collection is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if the collection is empty.
    pub fn last_or_fail(&self) -> Result<&T> {
        self.items.last().ok_or_else(CollectionError::item_not_found)
    }

    /// Returns the last element satisfying `predicate`.
    pub fn last_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|item| predicate(item))
    }

    /// Returns the element at `index`, or `None` when out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let collection = Collection::make([10, 20]);
    /// assert_eq!(collection.get(1), Some(&20));
    /// assert_eq!(collection.get(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] naming the index when it is
    /// out of range.
    pub fn get_or_fail(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| CollectionError::item_not_found_with(format!("index {index} out of range")))
    }

    /// Returns the only element of the collection.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ItemNotFound`] if the collection is empty.
    /// - [`CollectionError::MultipleItemsFound`] if it holds more than one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// assert_eq!(Collection::make([42]).sole(), Ok(&42));
    /// assert!(Collection::make([1, 2]).sole().unwrap_err().is_multiple_items_found());
    /// assert!(Collection::<i32>::new().sole().unwrap_err().is_item_not_found());
    /// ```
    pub fn sole(&self) -> Result<&T> {
        match self.items.as_slice() {
            [] => Err(CollectionError::item_not_found()),
            [only] => Ok(only),
            _ => Err(CollectionError::multiple_items_found()),
        }
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ItemNotFound`] if no element matches.
    /// - [`CollectionError::MultipleItemsFound`] if more than one matches.
    pub fn sole_where<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.items.iter().filter(|item| predicate(item));
        match (matches.next(), matches.next()) {
            (None, _) => Err(CollectionError::item_not_found()),
            (Some(only), None) => Ok(only),
            (Some(_), Some(_)) => Err(CollectionError::multiple_items_found()),
        }
    }

    /// Returns the index of the first element satisfying `predicate`.
    pub fn search<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }
}

impl<T: Clone> Collection<T> {
    /// Returns a clone of the first element, or `default` if empty.
    #[must_use]
    pub fn first_or(&self, default: T) -> T {
        self.items.first().cloned().unwrap_or(default)
    }

    /// Returns a clone of the last element, or `default` if empty.
    #[must_use]
    pub fn last_or(&self, default: T) -> T {
        self.items.last().cloned().unwrap_or(default)
    }

    /// Returns a clone of the element at `index`, or `default` when out of range.
    #[must_use]
    pub fn get_or(&self, index: usize, default: T) -> T {
        self.items.get(index).cloned().unwrap_or(default)
    }
}
