//! Path expressions and their resolution against nested values.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A path expression is split on a [`Delimiter`] (default `.`) into
//! segments. Segment `i` addresses nesting level `i` below the root: a key
//! when the value at that level is a mapping, an index when it is a
//! sequence. The empty expression addresses the root itself.
//!
//! ## Upsert
//!
//! Mutable resolution can create missing containers on the way down. The
//! container kind is chosen by peeking at the next segment: a run of ASCII
//! digits gets a sequence, anything else gets a mapping.
//!
//! # Examples
//!
//! ```
//! use dotpath::path::{Delimiter, Depth, PathExpr, PathResolver};
//! use serde_json::json;
//!
//! let doc = json!({"users": [{"name": "ada"}]});
//! let path = PathExpr::parse("users.0.name", &Delimiter::default());
//!
//! let found = PathResolver::new().resolve(&doc, &path, Depth::Full).unwrap();
//! assert_eq!(found, Some(&json!("ada")));
//! ```

pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
pub use types::{Delimiter, Depth, PathExpr};
