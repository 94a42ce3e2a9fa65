//! Dot-path access to nested [`Value`] maps, plus stateless list helpers.
//!
//! A path such as `"user.address.city"` addresses a value inside nested
//! [`Value::Map`] nodes. Lookups check the whole path as a literal top-level
//! key first, so `{"a.b": 1}` resolves `"a.b"` without splitting. Traversal
//! yields "not found" as soon as a segment is missing or an intermediate value
//! is not a map.
//!
//! [`set`] creates missing intermediate maps and replaces non-map values met on
//! the way. It never creates lists.
//!
//! # Examples
//!
//! ```rust
//! use collecta::{Value, arr};
//!
//! let mut config = Value::object();
//! arr::set(&mut config, "database.host", "localhost");
//! arr::set(&mut config, "database.port", 5432);
//!
//! assert_eq!(arr::get(&config, "database.port"), Some(&Value::from(5432)));
//! assert!(arr::has(&config, &["database.host", "database.port"]));
//!
//! arr::forget(&mut config, &["database.host"]);
//! assert_eq!(arr::get(&config, "database.host"), None);
//! ```

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::value::{Object, Value};
use std::collections::BTreeMap;

const SEPARATOR: char = '.';

// =============================================================================
// Path Access
// =============================================================================

/// Returns the value at `path`.
///
/// An empty path returns `data` itself. A non-map root resolves no other path.
#[must_use]
pub fn get<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(data);
    }
    let root = data.as_map()?;
    if let Some(value) = root.get(path) {
        return Some(value);
    }
    if !path.contains(SEPARATOR) {
        return None;
    }

    let mut current = data;
    for segment in path.split(SEPARATOR) {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

/// Returns a copy of the value at `path`, or `default` when it is absent.
///
/// A present [`Value::Null`] is returned as is.
#[must_use]
pub fn get_or(data: &Value, path: &str, default: impl Into<Value>) -> Value {
    get(data, path).cloned().unwrap_or_else(|| default.into())
}

/// Returns the value at `path`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if the path has an empty
/// segment (`"a..b"`, `".a"`) and no literal key matches it, and
/// [`CollectionError::ItemNotFound`] if nothing is stored at the path.
pub fn get_or_fail<'a>(data: &'a Value, path: &str) -> Result<&'a Value> {
    if let Some(value) = get(data, path) {
        return Ok(value);
    }
    if path.split(SEPARATOR).any(str::is_empty) {
        return Err(CollectionError::invalid_argument_with(format!(
            "path `{path}` contains an empty segment"
        )));
    }
    Err(CollectionError::item_not_found_with(format!(
        "path `{path}` not found"
    )))
}

/// Stores `value` at `path`, creating intermediate maps as needed.
///
/// Does nothing for an empty path or a non-map root.
pub fn set(data: &mut Value, path: &str, value: impl Into<Value>) {
    if path.is_empty() {
        return;
    }
    if let Value::Map(root) = data {
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        set_in(root, &segments, value.into());
    }
}

fn set_in(map: &mut Object, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_owned(), value);
        }
        [head, rest @ ..] => {
            let slot = map
                .entry((*head).to_owned())
                .or_insert_with(Value::object);
            if let Value::Map(next) = slot {
                set_in(next, rest, value);
            } else {
                let mut next = Object::new();
                set_in(&mut next, rest, value);
                *slot = Value::Map(next);
            }
        }
    }
}

/// Returns `true` if every path resolves to a non-null value.
#[must_use]
pub fn has(data: &Value, paths: &[&str]) -> bool {
    paths
        .iter()
        .all(|path| get(data, path).is_some_and(|value| !value.is_null()))
}

/// Returns `true` if at least one path resolves to a non-null value.
#[must_use]
pub fn has_any(data: &Value, paths: &[&str]) -> bool {
    paths
        .iter()
        .any(|path| get(data, path).is_some_and(|value| !value.is_null()))
}

/// Removes the value at every path.
///
/// A path that names a top-level key literally, dots included, removes that
/// key and leaves any nested value reached by splitting it untouched, the
/// same way [`get`] resolves it. Missing segments and non-map intermediates
/// are ignored.
pub fn forget(data: &mut Value, paths: &[&str]) {
    let Value::Map(root) = data else {
        return;
    };
    for path in paths {
        if root.remove(*path).is_some() || !path.contains(SEPARATOR) {
            continue;
        }
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        forget_in(root, &segments);
    }
}

fn forget_in(map: &mut Object, segments: &[&str]) {
    match segments {
        [] => {}
        [last] => {
            map.remove(*last);
        }
        [head, rest @ ..] => {
            if let Some(Value::Map(next)) = map.get_mut(*head) {
                forget_in(next, rest);
            }
        }
    }
}

/// Stores `value` at `path` unless a non-null value is already there.
pub fn add(data: &mut Value, path: &str, value: impl Into<Value>) {
    if get(data, path).is_none_or(Value::is_null) {
        set(data, path, value);
    }
}

/// Removes and returns the value at `path`.
pub fn pull(data: &mut Value, path: &str) -> Option<Value> {
    let value = get(data, path).cloned();
    forget(data, &[path]);
    value
}

/// Returns `true` if `key` is a top-level key of `data`, without splitting.
#[must_use]
pub fn exists(data: &Value, key: &str) -> bool {
    data.as_map().is_some_and(|map| map.contains_key(key))
}

// =============================================================================
// Flattening
// =============================================================================

/// Flattens nested maps into a single level keyed by dot paths.
///
/// Empty nested maps are kept as leaves.
///
/// # Examples
///
/// ```rust
/// use collecta::{Value, arr};
///
/// let mut nested = Value::object();
/// arr::set(&mut nested, "a.b", 1);
/// arr::set(&mut nested, "a.c", Value::object());
///
/// let flat = arr::dot(nested.as_map().unwrap());
/// assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["a.b", "a.c"]);
/// ```
#[must_use]
pub fn dot(data: &Object) -> Object {
    dot_with_prefix(data, "")
}

/// Like [`dot`], with every key prefixed by `prefix` and a dot.
#[must_use]
pub fn dot_with_prefix(data: &Object, prefix: &str) -> Object {
    let mut result = Object::new();
    dot_into(data, prefix, &mut result);
    result
}

fn dot_into(data: &Object, prefix: &str, result: &mut Object) {
    for (key, value) in data {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{SEPARATOR}{key}")
        };
        match value {
            Value::Map(nested) if !nested.is_empty() => dot_into(nested, &full_key, result),
            _ => {
                result.insert(full_key, value.clone());
            }
        }
    }
}

/// Expands dot-path keys into nested maps.
#[must_use]
pub fn undot(data: &Object) -> Object {
    let mut result = Value::object();
    for (key, value) in data {
        set(&mut result, key, value.clone());
    }
    match result {
        Value::Map(map) => map,
        _ => Object::new(),
    }
}

/// Flattens nested lists.
///
/// `depth` counts the levels beyond the first: `0` flattens one level, `1`
/// two levels, and so on. Non-list values are kept as they are.
#[must_use]
pub fn flatten(items: &[Value], depth: usize) -> Vec<Value> {
    let mut result = Vec::new();
    flatten_into(items, depth, &mut result);
    result
}

fn flatten_into(items: &[Value], depth: usize, result: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::List(inner) if depth > 0 => flatten_into(inner, depth - 1, result),
            Value::List(inner) => result.extend(inner.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
}

// =============================================================================
// Map Helpers
// =============================================================================

/// Returns the top-level entries whose key is in `keys`.
#[must_use]
pub fn only(data: &Object, keys: &[&str]) -> Object {
    keys.iter()
        .filter_map(|key| data.get_key_value(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns the top-level entries whose key is not in `keys`.
#[must_use]
pub fn except(data: &Object, keys: &[&str]) -> Object {
    data.iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Splits a map into its keys and its values, in key order.
#[must_use]
pub fn divide(data: &Object) -> (Vec<String>, Vec<Value>) {
    data.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .unzip()
}

/// Builds a `key=value` query string joined by `&`, in key order.
///
/// Keys and values are written as given, without percent-encoding.
#[must_use]
pub fn query(data: &BTreeMap<String, String>) -> String {
    data.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

// =============================================================================
// List Helpers
// =============================================================================

/// Wraps a value in a list.
///
/// [`Value::Null`] becomes an empty list and a [`Value::List`] is returned as
/// its items.
#[must_use]
pub fn wrap(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::List(items) => items,
        other => vec![other],
    }
}

/// Returns the first item, or `None` when empty.
#[must_use]
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns the first item satisfying `predicate`.
pub fn first_where<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(*item))
}

/// Returns the last item, or `None` when empty.
#[must_use]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Returns the last item satisfying `predicate`.
pub fn last_where<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().rev().find(|item| predicate(*item))
}

/// Returns the items for which `predicate(item, index)` holds.
pub fn where_<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(*item, *index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Drops every [`Value::Null`].
#[must_use]
pub fn where_not_null(items: &[Value]) -> Vec<Value> {
    where_(items, |item, _| !item.is_null())
}

/// Returns the items in a random order.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    Collection::from(items).shuffle().into_vec()
}

/// Returns a random item.
#[must_use]
pub fn random<T: Clone>(items: &[T]) -> Option<T> {
    Collection::from(items).random().cloned()
}

/// Returns `count` random items, chosen without replacement.
#[must_use]
pub fn random_n<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    Collection::from(items).random_n(count).into_vec()
}

/// Concatenates the inner lists.
#[must_use]
pub fn collapse<T: Clone>(items: &[Vec<T>]) -> Vec<T> {
    items.iter().flatten().cloned().collect()
}

/// Returns a copy of `items` with `value` in front.
#[must_use]
pub fn prepend<T: Clone>(items: &[T], value: T) -> Vec<T> {
    std::iter::once(value).chain(items.iter().cloned()).collect()
}

/// Returns every combination taking one item from each list, in order.
///
/// No lists, or any empty list, yields no combinations.
#[must_use]
pub fn cross_join<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    if lists.is_empty() {
        return Vec::new();
    }
    lists.iter().fold(vec![Vec::new()], |rows, list| {
        rows.iter()
            .flat_map(|row| {
                list.iter().map(move |item| {
                    let mut next = row.clone();
                    next.push(item.clone());
                    next
                })
            })
            .collect()
    })
}

// =============================================================================
// Optional Targets
// =============================================================================

/// Returns the value at `path` inside `target`.
///
/// A missing target resolves nothing; an empty path returns the target.
#[must_use]
pub fn data_get<'a>(target: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    target.and_then(|value| get(value, path))
}

/// Returns a copy of the value at `path` inside `target`, or `default`.
#[must_use]
pub fn data_get_or(target: Option<&Value>, path: &str, default: impl Into<Value>) -> Value {
    data_get(target, path)
        .cloned()
        .unwrap_or_else(|| default.into())
}

/// Stores `value` at `path` when `target` is present and a map.
pub fn data_set(target: Option<&mut Value>, path: &str, value: impl Into<Value>) {
    if let Some(target) = target {
        set(target, path, value);
    }
}

/// Removes every path from `target` when it is present and a map.
pub fn data_forget(target: Option<&mut Value>, paths: &[&str]) {
    if let Some(target) = target {
        forget(target, paths);
    }
}

// =============================================================================
// Tests
// =============================================================================
