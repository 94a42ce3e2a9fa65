//! Error types for collection operations.
//!
//! Only the `*_or_fail` and `sole*` families of operations report errors.
//! Every other accessor substitutes `None` or a caller-supplied default, so
//! callers choose explicitly which behavior they want at each call site.

use thiserror::Error;

/// Represents the failures a collection operation can report.
///
/// Each variant carries an optional human-readable message. When no message
/// is supplied, a fixed default phrase is used for display.
///
/// # Examples
///
/// ```rust
/// use collecta::CollectionError;
///
/// let error = CollectionError::item_not_found();
/// assert_eq!(format!("{error}"), "item not found");
///
/// let error = CollectionError::item_not_found_with("user 42 not found");
/// assert_eq!(format!("{error}"), "user 42 not found");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The requested element, key or value does not exist.
    #[error("{}", .message.as_deref().unwrap_or("item not found"))]
    ItemNotFound {
        /// Optional message overriding the default text.
        message: Option<String>,
    },

    /// A "must be exactly one" contract matched more than one element.
    #[error("{}", .message.as_deref().unwrap_or("multiple items found"))]
    MultipleItemsFound {
        /// Optional message overriding the default text.
        message: Option<String>,
    },

    /// The caller supplied malformed input, such as a dot-path with an empty segment.
    #[error("{}", .message.as_deref().unwrap_or("invalid argument"))]
    InvalidArgument {
        /// Optional message overriding the default text.
        message: Option<String>,
    },
}

impl CollectionError {
    /// Creates an `ItemNotFound` error with the default message.
    #[must_use]
    pub const fn item_not_found() -> Self {
        Self::ItemNotFound { message: None }
    }

    /// Creates an `ItemNotFound` error with a custom message.
    #[must_use]
    pub fn item_not_found_with(message: impl Into<String>) -> Self {
        Self::ItemNotFound {
            message: Some(message.into()),
        }
    }

    /// Creates a `MultipleItemsFound` error with the default message.
    #[must_use]
    pub const fn multiple_items_found() -> Self {
        Self::MultipleItemsFound { message: None }
    }

    /// Creates a `MultipleItemsFound` error with a custom message.
    #[must_use]
    pub fn multiple_items_found_with(message: impl Into<String>) -> Self {
        Self::MultipleItemsFound {
            message: Some(message.into()),
        }
    }

    /// Creates an `InvalidArgument` error with the default message.
    #[must_use]
    pub const fn invalid_argument() -> Self {
        Self::InvalidArgument { message: None }
    }

    /// Creates an `InvalidArgument` error with a custom message.
    #[must_use]
    pub fn invalid_argument_with(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: Some(message.into()),
        }
    }

    /// Returns `true` if this is an `ItemNotFound` error.
    #[must_use]
    pub const fn is_item_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }

    /// Returns `true` if this is a `MultipleItemsFound` error.
    #[must_use]
    pub const fn is_multiple_items_found(&self) -> bool {
        matches!(self, Self::MultipleItemsFound { .. })
    }

    /// Returns `true` if this is an `InvalidArgument` error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result alias used by the fail family of operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
