//! Random selection and shuffling.
//!
//! The plain methods use the thread-local generator from `rand`. The `*_with`
//! variants take a caller-supplied generator so results can be reproduced.

use super::Collection;
use crate::error::{CollectionError, Result};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom, index};

impl<T> Collection<T> {
    /// Returns a random element, or `None` when empty.
    #[must_use]
    pub fn random(&self) -> Option<&T> {
        self.random_with(&mut rand::rng())
    }

    /// Returns a random element chosen with `rng`.
    pub fn random_with<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized,
    {
        self.items.choose(rng)
    }

    /// Returns a random element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ItemNotFound`] if the collection is empty.
    pub fn random_or_fail(&self) -> Result<&T> {
        self.random().ok_or_else(CollectionError::item_not_found)
    }
}

impl<T: Clone> Collection<T> {
    /// Returns the elements in a random order.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Returns the elements in an order chosen with `rng`.
    pub fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut result = self.items.clone();
        result.shuffle(rng);
        Self::from_vec(result)
    }

    /// Returns `count` distinct positions' elements, chosen without replacement.
    ///
    /// Asking for at least as many elements as the collection holds returns a
    /// shuffled copy of the whole collection.
    #[must_use]
    pub fn random_n(&self, count: usize) -> Self {
        self.random_n_with(count, &mut rand::rng())
    }

    /// Like [`Collection::random_n`], choosing with `rng`.
    pub fn random_n_with<R>(&self, count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if count == 0 || self.items.is_empty() {
            return Self::new();
        }
        if count >= self.items.len() {
            return self.shuffle_with(rng);
        }
        Self::from_vec(
            index::sample(rng, self.items.len(), count)
                .into_iter()
                .map(|position| self.items[position].clone())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    fn test_random_on_empty() {
        let collection: Collection<i32> = Collection::new();
        assert_eq!(collection.random(), None);
        assert!(collection.random_or_fail().unwrap_err().is_item_not_found());
        assert!(collection.random_n(3).is_empty());
        assert!(collection.shuffle().is_empty());
    }

    #[rstest]
    fn test_random_returns_member() {
        let collection = Collection::make([1, 2, 3]);
        let picked = collection.random().copied();
        assert!(picked.is_some_and(|value| collection.contains_item(&value)));
    }

    #[rstest]
    fn test_random_n_is_without_replacement() {
        let collection = Collection::range(1, 20);
        let picked = collection.random_n(5);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked.unique().len(), 5);
    }

    #[rstest]
    fn test_random_n_more_than_available_is_full_shuffle() {
        let collection = Collection::make([1, 2, 3]);
        let picked = collection.random_n(10);
        assert_eq!(picked.sort().all(), &[1, 2, 3]);
        assert!(collection.random_n(0).is_empty());
    }

    #[rstest]
    fn test_seeded_shuffle_is_reproducible() {
        let collection = Collection::range(1, 10);
        let first = collection.shuffle_with(&mut StdRng::seed_from_u64(7));
        let second = collection.shuffle_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(first.sort(), collection);
    }
}
