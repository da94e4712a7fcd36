//! Error types for the dotpath library.
//!
//! This module provides the error hierarchy shared by path resolution,
//! the accessor operations, and configuration loading, using `thiserror`
//! for ergonomic error handling.

use crate::value::ValueKind;

/// Result type alias for operations that may fail with a dotpath error.
///
/// # Examples
///
/// ```
/// use dotpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dotpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Traversal tried to descend into a value that is not a mapping or sequence.
    #[error("cannot index {kind} with segment '{segment}'")]
    NotIndexable {
        /// The segment that could not be applied.
        segment: String,
        /// The kind of value encountered.
        kind: ValueKind,
    },

    /// A write targeted a location with no final key to assign.
    #[error("path '{path}' is not assignable")]
    NotAssignable {
        /// The offending path expression.
        path: String,
    },

    /// The requested location does not exist.
    #[error("not found: '{path}'")]
    NotFound {
        /// The path that could not be resolved.
        path: String,
    },

    /// A sequence was addressed with a segment that is not an index.
    #[error("invalid sequence index '{segment}'")]
    InvalidIndex {
        /// The segment that failed to parse as an index.
        segment: String,
    },

    /// A write addressed an index too far past the end of a sequence.
    #[error("index {index} is too far past the end of a sequence of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the sequence at the time of the write.
        len: usize,
    },

    /// An operation was applied to a value kind it does not support.
    #[error("cannot {operation} {kind} at '{path}'")]
    Unsupported {
        /// The operation that was attempted.
        operation: &'static str,
        /// The path the value was resolved from.
        path: String,
        /// The kind of value found there.
        kind: ValueKind,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A value could not be converted through serde.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a location does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::Error;
    ///
    /// let err = Error::NotFound { path: "a.b".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error was raised by descending into a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotpath::{Error, ValueKind};
    ///
    /// let err = Error::NotIndexable { segment: "b".to_string(), kind: ValueKind::Number };
    /// assert!(err.is_not_indexable());
    /// ```
    #[must_use]
    pub fn is_not_indexable(&self) -> bool {
        matches!(self, Self::NotIndexable { .. })
    }
}
