//! # collecta
//!
//! Fluent, eager collection utilities for Rust.
//!
//! ## Overview
//!
//! - **[`Collection`]**: an ordered, index-addressable sequence with chainable
//!   filtering, slicing, chunking, sorting, grouping and aggregation.
//! - **[`MapCollection`]**: a key-value map that remembers insertion order.
//! - **[`Value`] and [`arr`]**: dynamic nested data addressed by dot paths
//!   such as `"user.address.city"`.
//!
//! Transformations take `&self` and return a fresh container; the receiver is
//! never modified. In-place mutators (`push`, `put`, `forget`, ...) take
//! `&mut self`. Lookups come in a safe form returning `Option` and a fail form
//! returning [`Result`].
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the containers and [`Value`]
//! - `json`: `to_json`/`to_json_string` via `serde_json` (implies `serde`)
//! - `fxhash`: `rustc-hash` for the [`MapCollection`] index
//! - `ahash`: `ahash` for the [`MapCollection`] index
//!
//! ## Example
//!
//! ```rust
//! use collecta::prelude::*;
//!
//! let ages = Collection::make([("ann", 31), ("bob", 25), ("cid", 31)]);
//!
//! let by_age = ages.group_by(|person| person.1);
//! assert_eq!(by_age.keys().all(), &[31, 25]);
//!
//! let oldest = ages.sort_by_desc(|person| person.1).first().map(|person| person.0);
//! assert_eq!(oldest, Some("ann"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use collecta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arr;
    pub use crate::collection::{Collection, SortKey};
    pub use crate::error::{CollectionError, Result};
    pub use crate::map::MapCollection;
    pub use crate::numeric::Numeric;
    pub use crate::value::{Object, Value};
}

pub mod arr;
pub mod collection;
pub mod error;
pub mod map;
pub mod numeric;
pub mod value;

pub use collection::{Collection, SortKey};
pub use error::{CollectionError, Result};
pub use map::MapCollection;
pub use numeric::Numeric;
pub use value::{Object, Value};
