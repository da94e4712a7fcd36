//! Composite-value inspection over `serde_json::Value`.
//!
//! Path traversal only cares whether a value can be keyed into (a mapping)
//! or indexed into (a sequence). This module gives that distinction a name,
//! so the resolver can match on [`Composite`] and [`CompositeMut`] instead of
//! re-deriving it from the six JSON variants at every step.
//!
//! # Examples
//!
//! ```
//! use dotpath::value::{as_composite, is_indexable, Composite, ValueKind};
//! use serde_json::json;
//!
//! let doc = json!({"a": [1, 2]});
//! assert!(is_indexable(&doc));
//! assert!(matches!(as_composite(&doc["a"]), Some(Composite::Sequence(_))));
//! assert_eq!(ValueKind::of(&doc["a"][0]), ValueKind::Number);
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// How many `null` slots a single write may insert in front of a new index.
pub const MAX_INDEX_GAP: usize = 1024;

/// The kind of a JSON value, used when reporting type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// An ordered sequence.
    Array,
    /// A string-keyed mapping.
    Object,
}

impl ValueKind {
    /// Returns the kind of the given value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// Shared view of a value that supports keyed or indexed access.
#[derive(Debug, Clone, Copy)]
pub enum Composite<'a> {
    /// A string-keyed mapping.
    Mapping(&'a Map<String, Value>),
    /// An integer-indexed sequence.
    Sequence(&'a Vec<Value>),
}

impl<'a> Composite<'a> {
    /// Looks up a child by segment.
    ///
    /// Sequences only answer to segments that parse as an index; anything
    /// else is treated as absent.
    #[must_use]
    pub fn get(self, segment: &str) -> Option<&'a Value> {
        match self {
            Self::Mapping(map) => map.get(segment),
            Self::Sequence(items) => parse_index(segment).and_then(|idx| items.get(idx)),
        }
    }
}

/// Mutable view of a value that supports keyed or indexed access.
#[derive(Debug)]
pub enum CompositeMut<'a> {
    /// A string-keyed mapping.
    Mapping(&'a mut Map<String, Value>),
    /// An integer-indexed sequence.
    Sequence(&'a mut Vec<Value>),
}

/// Returns true if the value is a mapping or a sequence.
#[must_use]
pub const fn is_indexable(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Views the value as a composite, or `None` for scalars.
#[must_use]
pub fn as_composite(value: &Value) -> Option<Composite<'_>> {
    match value {
        Value::Object(map) => Some(Composite::Mapping(map)),
        Value::Array(items) => Some(Composite::Sequence(items)),
        _ => None,
    }
}

/// Views the value as a mutable composite, or `None` for scalars.
#[must_use]
pub fn as_composite_mut(value: &mut Value) -> Option<CompositeMut<'_>> {
    match value {
        Value::Object(map) => Some(CompositeMut::Mapping(map)),
        Value::Array(items) => Some(CompositeMut::Sequence(items)),
        _ => None,
    }
}

/// Parses a segment as a sequence index.
///
/// Only canonical ASCII digit runs are accepted. Signs, whitespace, leading
/// zeros (other than `"0"` itself) and values that overflow `usize` are
/// rejected, so `"01"` stays an ordinary key.
///
/// # Examples
///
/// ```
/// use dotpath::value::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("42"), Some(42));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("+1"), None);
/// assert_eq!(parse_index("a1"), None);
/// assert_eq!(parse_index(""), None);
/// ```
#[must_use]
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

/// Builds the empty container that should sit in front of `next`.
///
/// An index-looking next segment gets a sequence, anything else (including
/// no next segment at all) gets a mapping.
#[must_use]
pub fn container_for(next: Option<&str>) -> Value {
    match next {
        Some(segment) if parse_index(segment).is_some() => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    }
}

/// Stores `value` at `idx`, padding the sequence with `null` if needed.
///
/// Returns a mutable reference to the stored slot.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if reaching `idx` would take more than
/// [`MAX_INDEX_GAP`] padding slots. The sequence is left untouched.
pub fn set_index(items: &mut Vec<Value>, idx: usize, value: Value) -> Result<&mut Value> {
    if idx < items.len() {
        items[idx] = value;
    } else {
        if idx - items.len() > MAX_INDEX_GAP {
            return Err(Error::IndexOutOfRange {
                index: idx,
                len: items.len(),
            });
        }
        items.resize(idx, Value::Null);
        items.push(value);
    }
    Ok(&mut items[idx])
}
