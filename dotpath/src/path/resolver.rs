//! Path resolution over nested JSON values.
//!
//! This module provides the `PathResolver` type, which walks a root value
//! segment by segment, either read-only or creating missing containers on
//! the way down (upsert).

use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::types::{Depth, PathExpr};
use crate::value::{self, CompositeMut, ValueKind};

/// Resolves path expressions against a root value.
///
/// Resolution consumes one segment per nesting level. A missing key or
/// index stops the walk with `Ok(None)`, unless upsert is enabled, in which
/// case an empty container is inserted and the walk continues. The kind of
/// container is picked by peeking at the next segment: an index-looking
/// segment gets a sequence, anything else gets a mapping.
///
/// # Examples
///
/// ```
/// use dotpath::path::{Delimiter, Depth, PathExpr, PathResolver};
/// use serde_json::json;
///
/// let mut doc = json!({"a": 5});
/// let path = PathExpr::parse("b.c.0", &Delimiter::default());
///
/// let resolver = PathResolver::new().with_upsert(true);
/// let parent = resolver.resolve_mut(&mut doc, &path, Depth::Parent).unwrap();
/// assert_eq!(parent, Some(&mut json!([])));
/// assert_eq!(doc, json!({"a": 5, "b": {"c": []}}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    /// Whether missing containers are created during mutable resolution.
    upsert: bool,
}

impl PathResolver {
    /// Create a new resolver with upsert disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether missing containers are created.
    #[must_use]
    pub fn with_upsert(mut self, upsert: bool) -> Self {
        self.upsert = upsert;
        self
    }

    /// Returns whether this resolver creates missing containers.
    #[must_use]
    pub fn upsert(&self) -> bool {
        self.upsert
    }

    /// Resolve a path without modifying the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIndexable`] if a segment has to be applied to a
    /// scalar value.
    pub fn resolve<'v>(
        &self,
        root: &'v Value,
        path: &PathExpr,
        depth: Depth,
    ) -> Result<Option<&'v Value>> {
        let segments = path.segments();
        let mut current = root;

        for segment in &segments[..depth.for_len(segments.len())] {
            let Some(composite) = value::as_composite(current) else {
                return Err(not_indexable(segment, current));
            };
            log::trace!("descending into '{segment}'");
            match composite.get(segment) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }

    /// Resolve a path for writing, creating containers if upsert is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIndexable`] if a segment has to be applied to a
    /// scalar value, [`Error::InvalidIndex`] if upsert needs to create an
    /// entry in a sequence under a segment that is not an index, or
    /// [`Error::IndexOutOfRange`] if that index is too far past the end.
    pub fn resolve_mut<'v>(
        &self,
        root: &'v mut Value,
        path: &PathExpr,
        depth: Depth,
    ) -> Result<Option<&'v mut Value>> {
        let segments = path.segments();
        let mut current = root;

        for (i, segment) in segments[..depth.for_len(segments.len())].iter().enumerate() {
            let next = segments.get(i + 1).map(String::as_str);
            let kind = ValueKind::of(current);
            let Some(composite) = value::as_composite_mut(current) else {
                return Err(Error::NotIndexable {
                    segment: segment.clone(),
                    kind,
                });
            };
            log::trace!("descending into '{segment}'");

            current = match composite {
                CompositeMut::Mapping(map) => {
                    if self.upsert {
                        map.entry(segment.as_str()).or_insert_with(|| {
                            log::debug!("creating container at '{segment}'");
                            value::container_for(next)
                        })
                    } else {
                        match map.get_mut(segment) {
                            Some(child) => child,
                            None => return Ok(None),
                        }
                    }
                }
                CompositeMut::Sequence(items) => {
                    let Some(idx) = value::parse_index(segment) else {
                        if self.upsert {
                            return Err(Error::InvalidIndex {
                                segment: segment.clone(),
                            });
                        }
                        return Ok(None);
                    };
                    if idx < items.len() {
                        &mut items[idx]
                    } else if self.upsert {
                        log::debug!("creating container at index {idx}");
                        value::set_index(items, idx, value::container_for(next))?
                    } else {
                        return Ok(None);
                    }
                }
            };
        }

        Ok(Some(current))
    }
}

fn not_indexable(segment: &str, value: &Value) -> Error {
    Error::NotIndexable {
        segment: segment.to_string(),
        kind: ValueKind::of(value),
    }
}
