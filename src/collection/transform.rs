//! Copy-on-transform operations.
//!
//! Every method here leaves the receiver untouched and returns a collection
//! with freshly allocated storage.

use super::Collection;
use super::mutate::resolve_offset;
use crate::map::MapCollection;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

impl<T> Collection<T> {
    /// Maps every element with its index into a new collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let labels = Collection::make(["a", "b"]).map(|item, index| format!("{index}:{item}"));
    /// assert_eq!(labels.all(), &["0:a", "1:b"]);
    /// ```
    pub fn map<U, F>(&self, mut callback: F) -> Collection<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        Collection::from_vec(
            self.items
                .iter()
                .enumerate()
                .map(|(index, item)| callback(item, index))
                .collect(),
        )
    }

    /// Folds the elements from left to right, starting with `initial`.
    pub fn reduce<U, F>(&self, initial: U, mut callback: F) -> U
    where
        F: FnMut(U, &T, usize) -> U,
    {
        self.items
            .iter()
            .enumerate()
            .fold(initial, |accumulator, (index, item)| {
                callback(accumulator, item, index)
            })
    }

    /// Maps every element to a sequence and concatenates the results.
    pub fn flat_map<U, I, F>(&self, mut callback: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T, usize) -> I,
    {
        Collection::from_vec(
            self.items
                .iter()
                .enumerate()
                .flat_map(|(index, item)| callback(item, index))
                .collect(),
        )
    }

    /// Extracts one value from every element.
    pub fn pluck<U, F>(&self, mut extractor: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map(|item, _| extractor(item))
    }

    /// Joins the elements' string forms with `separator`.
    pub fn implode_with<F>(&self, mut to_string: F, separator: &str) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.items
            .iter()
            .map(&mut to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Joins the elements' string forms with `glue`, using `final_glue`
    /// before the last element when given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let names = Collection::make(["Ann", "Bob", "Cid"]);
    /// assert_eq!(names.join_with(|name| name.to_string(), ", ", Some(" and ")), "Ann, Bob and Cid");
    /// ```
    pub fn join_with<F>(&self, mut to_string: F, glue: &str, final_glue: Option<&str>) -> String
    where
        F: FnMut(&T) -> String,
    {
        match (self.items.as_slice(), final_glue) {
            ([], _) => String::new(),
            ([only], _) => to_string(only),
            ([init @ .., last], Some(final_glue)) if !final_glue.is_empty() => {
                let head = init
                    .iter()
                    .map(&mut to_string)
                    .collect::<Vec<_>>()
                    .join(glue);
                format!("{head}{final_glue}{}", to_string(last))
            }
            _ => self.implode_with(to_string, glue),
        }
    }

    /// Applies `callback` when `condition` holds, otherwise returns `self`.
    pub fn when<F>(self, condition: bool, callback: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { callback(self) } else { self }
    }

    /// Applies `callback` unless `condition` holds.
    pub fn unless<F>(self, condition: bool, callback: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.when(!condition, callback)
    }

    /// Applies `callback` when the collection is empty.
    pub fn when_empty<F>(self, callback: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let condition = self.is_empty();
        self.when(condition, callback)
    }

    /// Applies `callback` when the collection is not empty.
    pub fn when_not_empty<F>(self, callback: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let condition = self.is_not_empty();
        self.when(condition, callback)
    }
}

impl<T: fmt::Display> Collection<T> {
    /// Joins the elements' `Display` forms with `separator`.
    pub fn implode(&self, separator: &str) -> String {
        self.implode_with(ToString::to_string, separator)
    }

    /// Joins the elements' `Display` forms, with an optional final separator.
    pub fn join(&self, glue: &str, final_glue: Option<&str>) -> String {
        self.join_with(ToString::to_string, glue, final_glue)
    }
}

impl<T: Clone> Collection<T> {
    /// Returns the elements satisfying `predicate`, in their original order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        )
    }

    /// Returns the elements not satisfying `predicate`.
    pub fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|item| !predicate(item))
    }

    /// Returns a copy of the elements.
    #[must_use]
    pub fn values(&self) -> Self {
        self.clone()
    }

    /// Returns a sub-range of the collection.
    ///
    /// A negative `offset` counts from the end. An offset past the end yields
    /// an empty collection and `length` is clamped to what remains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let collection = Collection::make([1, 2, 3, 4, 5]);
    /// assert_eq!(collection.slice(1, Some(2)).all(), &[2, 3]);
    /// assert_eq!(collection.slice(-2, None).all(), &[4, 5]);
    /// assert!(collection.slice(9, None).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, offset: isize, length: Option<usize>) -> Self {
        let total = self.items.len();
        let start = resolve_offset(offset, total);
        if start >= total {
            return Self::new();
        }
        let end = length.map_or(total, |length| start.saturating_add(length).min(total));
        Self::from_vec(self.items[start..end].to_vec())
    }

    /// Takes the first `count` elements, or the last `|count|` when negative.
    #[must_use]
    pub fn take(&self, count: isize) -> Self {
        if count < 0 {
            self.slice(count, None)
        } else {
            self.slice(0, Some(count.unsigned_abs()))
        }
    }

    /// Skips the first `count` elements.
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        self.items
            .get(count..)
            .map_or_else(Self::new, |rest| Self::from_vec(rest.to_vec()))
    }

    /// Takes elements from the front while `predicate` holds.
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.items
                .iter()
                .take_while(|item| predicate(item))
                .cloned()
                .collect(),
        )
    }

    /// Takes elements from the front until `predicate` first holds.
    pub fn take_until<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.take_while(|item| !predicate(item))
    }

    /// Skips the leading run of elements satisfying `predicate`.
    ///
    /// Once an element fails the predicate, it and everything after it are kept.
    pub fn skip_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.items
                .iter()
                .skip_while(|item| predicate(item))
                .cloned()
                .collect(),
        )
    }

    /// Skips elements until `predicate` first holds.
    pub fn skip_until<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.skip_while(|item| !predicate(item))
    }

    /// Splits the collection into matching and non-matching elements in one pass.
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();

        for element in &self.items {
            if predicate(element) {
                pass.push(element.clone());
            } else {
                fail.push(element.clone());
            }
        }

        (Self::from_vec(pass), Self::from_vec(fail))
    }

    /// Keeps the first element for every distinct key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let words = Collection::make(["apple", "avocado", "banana"]);
    /// let unique = words.unique_by(|word| word.chars().next());
    /// assert_eq!(unique.all(), &["apple", "banana"]);
    /// ```
    pub fn unique_by<K, F>(&self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.filter(|item| seen.insert(key(item)))
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_vec(self.items.iter().rev().cloned().collect())
    }

    /// Returns this collection followed by every collection in `others`.
    #[must_use]
    pub fn merge(&self, others: &[&Self]) -> Self {
        let mut result = self.items.clone();
        for other in others {
            result.extend_from_slice(&other.items);
        }
        Self::from_vec(result)
    }

    /// Returns this collection followed by `items`.
    #[must_use]
    pub fn concat<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = self.items.clone();
        result.extend(items);
        Self::from_vec(result)
    }

    /// Returns every `step`-th element, starting at `offset`.
    ///
    /// A zero step yields an empty collection.
    #[must_use]
    pub fn nth(&self, step: usize, offset: usize) -> Self {
        if step == 0 {
            return Self::new();
        }
        Self::from_vec(
            self.items
                .iter()
                .skip(offset)
                .step_by(step)
                .cloned()
                .collect(),
        )
    }

    /// Returns the elements of the 1-based `page` of size `per_page`.
    ///
    /// Pages below 1 are treated as the first page.
    #[must_use]
    pub fn for_page(&self, page: usize, per_page: usize) -> Self {
        let offset = page.max(1).saturating_sub(1).saturating_mul(per_page);
        isize::try_from(offset).map_or_else(|_| Self::new(), |offset| self.slice(offset, Some(per_page)))
    }

    /// Pads the collection with `value` to `|size|` elements.
    ///
    /// Positive sizes pad on the right, negative sizes on the left. A
    /// collection already at least `|size|` long is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let collection = Collection::make([1, 2]);
    /// assert_eq!(collection.pad(4, 0).all(), &[1, 2, 0, 0]);
    /// assert_eq!(collection.pad(-4, 0).all(), &[0, 0, 1, 2]);
    /// assert_eq!(collection.pad(1, 0).all(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn pad(&self, size: isize, value: T) -> Self {
        let target = size.unsigned_abs();
        let current = self.items.len();
        if current >= target {
            return self.clone();
        }

        let padding = std::iter::repeat_n(value, target - current);
        let items = if size > 0 {
            self.items.iter().cloned().chain(padding).collect()
        } else {
            padding.chain(self.items.iter().cloned()).collect()
        };
        Self::from_vec(items)
    }

    /// Overwrites the leading elements with `items`, keeping the length.
    #[must_use]
    pub fn replace(&self, items: &[T]) -> Self {
        let mut result = self.items.clone();
        for (slot, item) in result.iter_mut().zip(items) {
            slot.clone_from(item);
        }
        Self::from_vec(result)
    }

    /// Splits the collection into chunks of `size`, returned as a collection.
    ///
    /// A zero size yields no chunks.
    #[must_use]
    pub fn chunk(&self, size: usize) -> Collection<Self> {
        Collection::from_vec(self.chunk_into(size))
    }

    /// Splits the collection into chunks of `size`.
    ///
    /// Every chunk holds `size` elements except possibly the last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let chunks = Collection::make([1, 2, 3, 4, 5]).chunk_into(2);
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[2].all(), &[5]);
    /// ```
    #[must_use]
    pub fn chunk_into(&self, size: usize) -> Vec<Self> {
        if size == 0 {
            return Vec::new();
        }
        self.items
            .chunks(size)
            .map(|chunk| Self::from_vec(chunk.to_vec()))
            .collect()
    }

    /// Distributes the elements into `groups` contiguous groups.
    ///
    /// Group sizes differ by at most one, with the larger groups first.
    /// Empty groups are dropped, so fewer than `groups` groups are returned
    /// when there are fewer elements than groups.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let groups = Collection::range(1, 7).split(3);
    /// let sizes: Vec<usize> = groups.iter().map(|group| group.len()).collect();
    /// assert_eq!(sizes, vec![3, 2, 2]);
    /// ```
    #[must_use]
    pub fn split(&self, groups: usize) -> Vec<Self> {
        if self.items.is_empty() || groups == 0 {
            return Vec::new();
        }

        let base = self.items.len() / groups;
        let remainder = self.items.len() % groups;

        let mut result = Vec::with_capacity(groups.min(self.items.len()));
        let mut start = 0;
        for group in 0..groups {
            let size = if group < remainder { base + 1 } else { base };
            if size > 0 {
                result.push(Self::from_vec(self.items[start..start + size].to_vec()));
                start += size;
            }
        }
        result
    }

    /// Returns overlapping windows of exactly `size` elements advancing by `step`.
    ///
    /// A zero step is treated as one. Windows that would run past the end are
    /// not produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let windows = Collection::make([1, 2, 3, 4, 5]).sliding(3, 1);
    /// assert_eq!(windows.len(), 3);
    /// assert_eq!(windows[2].all(), &[3, 4, 5]);
    /// ```
    #[must_use]
    pub fn sliding(&self, size: usize, step: usize) -> Vec<Self> {
        if size == 0 || self.items.is_empty() {
            return Vec::new();
        }
        self.items
            .windows(size)
            .step_by(step.max(1))
            .map(|window| Self::from_vec(window.to_vec()))
            .collect()
    }

    /// Pairs every element with the element at the same index of `other`.
    ///
    /// The result is as long as the shorter input.
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &Collection<U>) -> Collection<(T, U)> {
        Collection::from_vec(
            self.items
                .iter()
                .cloned()
                .zip(other.items.iter().cloned())
                .collect(),
        )
    }

    /// Builds rows from the elements at the same index of every collection.
    ///
    /// The number of rows equals the length of the shortest collection.
    #[must_use]
    pub fn zip_all(collections: &[&Self]) -> Collection<Vec<T>> {
        let Some(rows) = collections.iter().map(|collection| collection.len()).min() else {
            return Collection::new();
        };
        Collection::from_vec(
            (0..rows)
                .map(|row| {
                    collections
                        .iter()
                        .map(|collection| collection.items[row].clone())
                        .collect()
                })
                .collect(),
        )
    }

    /// Returns the cartesian product of `collections`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// let sizes = Collection::make(["S", "M"]);
    /// let colors = Collection::make(["red", "blue"]);
    /// let product = Collection::cross_join(&[&sizes, &colors]);
    /// assert_eq!(product.len(), 4);
    /// assert_eq!(product.first(), Some(&vec!["S", "red"]));
    /// ```
    #[must_use]
    pub fn cross_join(collections: &[&Self]) -> Collection<Vec<T>> {
        if collections.is_empty() {
            return Collection::new();
        }
        let mut rows: Vec<Vec<T>> = vec![Vec::new()];
        for collection in collections {
            rows = rows
                .iter()
                .flat_map(|row| {
                    collection.items.iter().map(move |item| {
                        let mut next = row.clone();
                        next.push(item.clone());
                        next
                    })
                })
                .collect();
        }
        Collection::from_vec(rows)
    }
}

impl<T: Clone> Collection<Collection<T>> {
    /// Flattens a collection of collections by one level.
    #[must_use]
    pub fn collapse(&self) -> Collection<T> {
        Collection::from_vec(
            self.items
                .iter()
                .flat_map(|inner| inner.items.iter().cloned())
                .collect(),
        )
    }
}

impl<T: Clone> Collection<Vec<T>> {
    /// Flattens a collection of vectors by one level.
    #[must_use]
    pub fn collapse_vecs(&self) -> Collection<T> {
        Collection::from_vec(self.items.iter().flatten().cloned().collect())
    }
}

impl Collection<String> {
    /// Maps every string to its index. Later duplicates overwrite earlier indices.
    #[must_use]
    pub fn flip(&self) -> MapCollection<String, usize> {
        let mut result = MapCollection::new();
        for (index, item) in self.items.iter().enumerate() {
            result.put(item.clone(), index);
        }
        result
    }
}
