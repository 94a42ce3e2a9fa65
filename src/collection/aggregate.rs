//! Numeric aggregation and extremes.
//!
//! Aggregates never fail: averages and medians of an empty collection are
//! `0.0`, extremes are `None` and the mode is an empty vector.

use super::Collection;
use crate::numeric::Numeric;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

impl<T: Numeric> Collection<T> {
    /// Returns the sum of the elements, or zero when empty.
    ///
    /// Integer sums wrap around on overflow.
    #[must_use]
    pub fn sum(&self) -> T {
        self.items
            .iter()
            .fold(T::ZERO, |sum, item| sum.wrapping_add(*item))
    }

    /// Returns the arithmetic mean, or `0.0` when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let total: f64 = self.items.iter().map(|item| item.to_f64()).sum();
        total / self.items.len() as f64
    }

    /// Returns the median, or `0.0` when empty.
    ///
    /// With an even number of elements, the two middle values are averaged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// assert_eq!(Collection::make([4, 1, 3, 2]).median(), 2.5);
    /// assert_eq!(Collection::make([5, 1, 3, 2, 4]).median(), 3.0);
    /// ```
    #[must_use]
    pub fn median(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }

        let mut sorted = self.items.clone();
        sorted.sort_by(|left, right| left.partial_cmp(right).unwrap_or(Ordering::Equal));

        let middle = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[middle - 1].to_f64() + sorted[middle].to_f64()) / 2.0
        } else {
            sorted[middle].to_f64()
        }
    }
}

impl<T> Collection<T> {
    /// Returns the sum of the values extracted with `value`.
    ///
    /// Integer sums wrap around on overflow.
    pub fn sum_by<N, F>(&self, mut value: F) -> N
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        self.items
            .iter()
            .fold(N::ZERO, |sum, item| sum.wrapping_add(value(item)))
    }

    /// Returns the mean of the values extracted with `value`, or `0.0` when empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_by<N, F>(&self, mut value: F) -> f64
    where
        N: Numeric,
        F: FnMut(&T) -> N,
    {
        if self.items.is_empty() {
            return 0.0;
        }
        let total: f64 = self.items.iter().map(|item| value(item).to_f64()).sum();
        total / self.items.len() as f64
    }

    /// Returns the first element with the smallest key.
    pub fn min_by<K, F>(&self, mut key: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.extreme_by(&mut key, Ordering::Less)
    }

    /// Returns the first element with the largest key.
    pub fn max_by<K, F>(&self, mut key: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.extreme_by(&mut key, Ordering::Greater)
    }

    fn extreme_by<K, F>(&self, key: &mut F, wanted: Ordering) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let mut items = self.items.iter();
        let first = items.next()?;
        let mut best = (first, key(first));
        for item in items {
            let candidate = key(item);
            if candidate.partial_cmp(&best.1) == Some(wanted) {
                best = (item, candidate);
            }
        }
        Some(best.0)
    }
}

impl<T: Clone + PartialOrd> Collection<T> {
    /// Returns the smallest element, or `None` when empty.
    #[must_use]
    pub fn min(&self) -> Option<T> {
        self.min_by(Clone::clone).cloned()
    }

    /// Returns the largest element, or `None` when empty.
    #[must_use]
    pub fn max(&self) -> Option<T> {
        self.max_by(Clone::clone).cloned()
    }
}

impl<T: Clone + Eq + Hash> Collection<T> {
    /// Returns every value tied for the highest frequency.
    ///
    /// Values are returned in the order of their first occurrence. An empty
    /// collection yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::Collection;
    ///
    /// assert_eq!(Collection::make([1, 2, 2, 3, 3]).mode(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn mode(&self) -> Vec<T> {
        let mut counts: HashMap<&T, usize> = HashMap::new();
        let mut order = Vec::new();
        for item in &self.items {
            let count = counts.entry(item).or_insert(0);
            if *count == 0 {
                order.push(item);
            }
            *count += 1;
        }

        let Some(highest) = counts.values().copied().max() else {
            return Vec::new();
        };
        order
            .into_iter()
            .filter(|item| counts[item] == highest)
            .cloned()
            .collect()
    }
}
