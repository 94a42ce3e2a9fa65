//! Dynamic values for nested, loosely-typed data.
//!
//! [`Value`] is the node type walked by the dot-path helpers in
//! [`arr`](crate::arr). Maps use [`Object`], a `BTreeMap`, so iteration and
//! rendering are ordered by key.
//!
//! # Examples
//!
//! ```rust
//! use collecta::Value;
//!
//! let user: Value = [("name", Value::from("Ann")), ("age", Value::from(30))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(user.to_string(), r#"{"age": 30, "name": "Ann"}"#);
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// A string-keyed map of values.
pub type Object = BTreeMap<String, Value>;

/// A dynamically-typed value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed map of values.
    Map(Object),
}

impl Value {
    /// Creates an empty map value.
    #[must_use]
    pub const fn object() -> Self {
        Self::Map(Object::new())
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Value::Map`].
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` for [`Value::List`].
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the map if this is a [`Value::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&Object> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the map mutably if this is a [`Value::Map`].
    pub fn as_map_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the items if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`].
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the number as `f64`; integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            Self::Int(number) => Some(*number as f64),
            _ => None,
        }
    }

    /// Returns the flag if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl From<$integer> for Value {
                fn from(number: $integer) -> Self {
                    Self::Int(i64::from(number))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Self>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(map) => {
                write!(formatter, "{{")?;
                for (position, (key, value)) in map.iter().enumerate() {
                    if position > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key:?}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(42), "42")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from("hi"), "\"hi\"")]
    #[case(Value::from(vec![Value::from(1), Value::Null]), "[1, null]")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_map_from_pairs_is_key_ordered() {
        let value: Value = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(value.to_string(), r#"{"a": 1, "b": 2}"#);
        assert!(value.is_map());
    }

    #[rstest]
    fn test_option_conversion() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[rstest]
    fn test_accessors() {
        assert_eq!(Value::from(3).as_i64(), Some(3));
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from(1).as_map(), None);
        assert_eq!(Value::object().as_map().map(Object::len), Some(0));
        assert!(Value::default().is_null());
    }
}
