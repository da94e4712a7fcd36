//! Core types for path expressions.
//!
//! This module defines the validated segment delimiter and the parsed path
//! expression consumed by the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The string that separates segments in a path expression.
///
/// Delimiters are never empty. The default is `.`.
///
/// # Examples
///
/// ```
/// use dotpath::path::Delimiter;
///
/// let slash = Delimiter::new("/").unwrap();
/// assert_eq!(slash.as_str(), "/");
/// assert_eq!(Delimiter::default().as_str(), ".");
/// assert!(Delimiter::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    /// Create a new delimiter.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the delimiter is empty.
    pub fn new(delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(Error::Validation {
                field: "delimiter".into(),
                message: "delimiter must be non-empty".into(),
            });
        }
        Ok(Self(delimiter))
    }

    /// Get the delimiter as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(".".to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Delimiter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Delimiter> for String {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.0
    }
}

/// How far the resolver should walk along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Consume every segment and land on the addressed value.
    Full,
    /// Stop one segment short and land on the container that holds it.
    Parent,
}

impl Depth {
    /// Number of segments to consume for a path of `len` segments.
    #[must_use]
    pub const fn for_len(self, len: usize) -> usize {
        match self {
            Self::Full => len,
            Self::Parent => len.saturating_sub(1),
        }
    }
}

/// A parsed path expression.
///
/// Parsing splits on the delimiter with plain string-split semantics, so
/// adjacent delimiters produce empty segments. An empty input is the root
/// path, with no segments.
///
/// # Examples
///
/// ```
/// use dotpath::path::{Delimiter, PathExpr};
///
/// let path = PathExpr::parse("a.b.0", &Delimiter::default());
/// assert_eq!(path.segments(), ["a", "b", "0"]);
/// assert_eq!(path.last(), Some("0"));
///
/// assert!(PathExpr::parse("", &Delimiter::default()).is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathExpr {
    segments: Vec<String>,
}

impl PathExpr {
    /// Parse a path expression using the given delimiter.
    #[must_use]
    pub fn parse(input: &str, delimiter: &Delimiter) -> Self {
        if input.is_empty() {
            return Self::root();
        }
        Self {
            segments: input.split(delimiter.as_str()).map(str::to_string).collect(),
        }
    }

    /// The path addressing the root itself.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from already-split segments.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if this path has no segments.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments in order from the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Render the path back to a string with the given delimiter.
    #[must_use]
    pub fn join(&self, delimiter: &Delimiter) -> String {
        self.segments.join(delimiter.as_str())
    }
}
