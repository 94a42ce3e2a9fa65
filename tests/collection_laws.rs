//! Property-based tests for Collection, MapCollection and the dot-path helpers.
//!
//! ## Laws
//!
//! 1. **Partition**: `filter(p)` and `reject(p)` together hold the source multiset
//! 2. **Sort Idempotence**: `sort(sort(c)) == sort(c)`
//! 3. **Sort Stability**: `sort_by` keeps the input order of equal keys
//! 4. **Chunk Cover**: `chunk_into(s)` yields `ceil(len / s)` chunks that concatenate to the source
//! 5. **Split Balance**: `split(n)` group sizes differ by at most one and sum to `len`
//! 6. **Dot Round Trip**: `undot(dot(m)) == m` for maps without empty nested maps or dotted keys

use collecta::{Collection, MapCollection, Object, Value, arr};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arbitrary_items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..60)
}

fn arbitrary_segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arbitrary_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

fn arbitrary_object() -> impl Strategy<Value = Object> {
    let leaf = arbitrary_leaf();
    let tree = leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(arbitrary_segment(), inner, 1..4).prop_map(Value::Map)
    });
    prop::collection::btree_map(arbitrary_segment(), tree, 0..5)
}

// =============================================================================
// Collection Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_reject_partition(items in arbitrary_items(), pivot in -50..50_i32) {
        let collection = Collection::from_vec(items);
        let kept = collection.filter(|n| *n < pivot);
        let dropped = collection.reject(|n| *n < pivot);

        prop_assert_eq!(kept.len() + dropped.len(), collection.len());
        prop_assert_eq!(kept.concat(dropped).sort(), collection.sort());
    }

    #[test]
    fn prop_sort_is_idempotent(items in arbitrary_items()) {
        let sorted = Collection::from_vec(items).sort();
        prop_assert_eq!(sorted.sort(), sorted);
    }

    #[test]
    fn prop_sort_by_is_stable(items in arbitrary_items()) {
        let tagged: Collection<(i32, usize)> = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| (item.rem_euclid(5), position))
            .collect();
        let sorted = tagged.sort_by(|pair| pair.0);
        for window in sorted.all().windows(2) {
            if window[0].0 == window[1].0 {
                prop_assert!(window[0].1 < window[1].1);
            }
        }
    }

    #[test]
    fn prop_chunk_into_covers_source(items in arbitrary_items(), size in 1..10_usize) {
        let collection = Collection::from_vec(items);
        let chunks = collection.chunk_into(size);

        prop_assert_eq!(chunks.len(), collection.len().div_ceil(size));
        prop_assert!(chunks.iter().all(|chunk| !chunk.is_empty() && chunk.len() <= size));
        let rejoined: Collection<i32> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(rejoined, collection);
    }

    #[test]
    fn prop_split_is_balanced(items in arbitrary_items(), groups in 1..10_usize) {
        let collection = Collection::from_vec(items);
        let parts = collection.split(groups);
        let sizes: Vec<usize> = parts.iter().map(Collection::len).collect();

        prop_assert_eq!(sizes.iter().sum::<usize>(), collection.len());
        prop_assert_eq!(parts.len(), groups.min(collection.len()));
        if let (Some(largest), Some(smallest)) = (sizes.iter().max(), sizes.iter().min()) {
            prop_assert!(largest - smallest <= 1);
        }
        prop_assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn prop_unique_has_no_duplicates(items in arbitrary_items()) {
        let unique = Collection::from_vec(items).unique();
        prop_assert!(unique.duplicates().is_empty());
    }
}

// =============================================================================
// MapCollection Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_put_then_get(
        entries in prop::collection::vec((arbitrary_segment(), any::<i32>()), 0..30),
        key in arbitrary_segment(),
        value in any::<i32>()
    ) {
        let mut map: MapCollection<String, i32> = entries.into_iter().collect();
        map.put(key.clone(), value);
        prop_assert_eq!(map.get(&key), Some(&value));
    }

    #[test]
    fn prop_forget_keeps_lookups_consistent(
        entries in prop::collection::vec((arbitrary_segment(), any::<i32>()), 0..30),
        removed in prop::collection::vec(arbitrary_segment(), 0..5)
    ) {
        let mut map: MapCollection<String, i32> = entries.into_iter().collect();
        map.forget(&removed);
        prop_assert!(!map.has_any(&removed));
        for (key, value) in &map {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }
}

// =============================================================================
// Dot-path Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_undot_inverts_dot(object in arbitrary_object()) {
        prop_assert_eq!(arr::undot(&arr::dot(&object)), object);
    }

    #[test]
    fn prop_set_then_get(
        object in arbitrary_object(),
        segments in prop::collection::vec(arbitrary_segment(), 1..4),
        leaf in arbitrary_leaf()
    ) {
        let mut data = Value::Map(object);
        let path = segments.join(".");
        arr::set(&mut data, &path, leaf.clone());
        prop_assert_eq!(arr::get(&data, &path), Some(&leaf));
    }
}
