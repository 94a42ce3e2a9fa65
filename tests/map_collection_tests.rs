//! Integration tests for MapCollection.

use collecta::{Collection, MapCollection};
use rstest::{fixture, rstest};
use std::collections::HashMap;

#[fixture]
fn inventory() -> MapCollection<&'static str, u32> {
    MapCollection::from_pairs([("apples", 3), ("pears", 0), ("plums", 7)])
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_insertion_order_survives_updates(mut inventory: MapCollection<&'static str, u32>) {
    inventory.put("pears", 5).put("figs", 1);
    inventory.pull(&"apples");
    inventory.put("apples", 2);
    assert_eq!(inventory.keys().all(), &["pears", "plums", "figs", "apples"]);
    assert_eq!(inventory.values().all(), &[5, 7, 1, 2]);
}

#[rstest]
fn test_from_ordered_fixes_hash_map_order() {
    let source: HashMap<String, i32> = (1..=20).map(|n| (format!("k{n}"), n)).collect();
    let order: Vec<String> = (1..=20).rev().map(|n| format!("k{n}")).collect();
    let map = MapCollection::from_ordered(source, &order);
    assert_eq!(map.keys().into_vec(), order);
    assert_eq!(map.first(), Some(&20));
}

#[rstest]
fn test_sort_keys_reorders_only(inventory: MapCollection<&'static str, u32>) {
    let shuffled = MapCollection::from_pairs([("plums", 7), ("apples", 3), ("pears", 0)]);
    assert_eq!(shuffled.sort_keys(), inventory);
    assert_eq!(inventory.sort_keys_desc().first_key(), Some(&"plums"));
}

// =============================================================================
// Lookups
// =============================================================================

#[rstest]
fn test_has_semantics(inventory: MapCollection<&'static str, u32>) {
    assert!(inventory.has(&["apples", "plums"]));
    assert!(!inventory.has(&["apples", "kiwis"]));
    assert!(inventory.has_any(&["kiwis", "pears"]));
    assert!(!inventory.has_any(&[]));
}

#[rstest]
fn test_get_or_put_inserts_once(mut inventory: MapCollection<&'static str, u32>) {
    assert_eq!(*inventory.get_or_put("kiwis", 9), 9);
    assert_eq!(*inventory.get_or_put("kiwis", 1), 9);
    assert_eq!(inventory.len(), 4);
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn test_merge_union_and_key_sets(inventory: MapCollection<&'static str, u32>) {
    let delivery = MapCollection::from_pairs([("pears", 12), ("limes", 4)]);

    let merged = inventory.merge(&[&delivery]);
    assert_eq!(merged.to_string(), "{apples: 3, pears: 12, plums: 7, limes: 4}");

    let united = inventory.union(&delivery);
    assert_eq!(united.to_string(), "{apples: 3, pears: 0, plums: 7, limes: 4}");

    assert_eq!(inventory.diff_keys(&delivery).keys().all(), &["apples", "plums"]);
    assert_eq!(inventory.intersect_by_keys(&delivery).keys().all(), &["pears"]);
}

#[rstest]
fn test_filter_by_value(inventory: MapCollection<&'static str, u32>) {
    let in_stock = inventory.filter(|count, _| *count > 0);
    assert_eq!(in_stock.keys().all(), &["apples", "plums"]);
    let sold_out = inventory.reject(|count, _| *count > 0);
    assert_eq!(sold_out.keys().all(), &["pears"]);
}

#[rstest]
fn test_combine_and_pairs() {
    let keys = Collection::make(["a", "b", "a"]);
    let values = Collection::make([1, 2, 3]);
    let map = MapCollection::combine(&keys, &values);
    assert_eq!(map.to_pairs().all(), &[("a", 3), ("b", 2)]);
}

#[rstest]
fn test_each_while_stops(inventory: MapCollection<&'static str, u32>) {
    let mut visited = Vec::new();
    inventory.each_while(|key, _| {
        visited.push(*key);
        *key != "pears"
    });
    assert_eq!(visited, vec!["apples", "pears"]);
}

#[rstest]
fn test_when_applies_conditionally(inventory: MapCollection<&'static str, u32>) {
    let trimmed = inventory.clone().when(true, |map| map.except(&["plums"]));
    assert_eq!(trimmed.len(), 2);
    let untouched = inventory.clone().when(false, |map| map.except(&["plums"]));
    assert_eq!(untouched, inventory);
}
