#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dotpath
//!
//! A library for reading and writing values inside nested JSON data using
//! delimiter-separated path expressions such as `a.b.0.c`.
//!
//! ## Core Types
//!
//! - [`Accessor`]: a bound root value with `find`, `update`, `apply`,
//!   `copy`, `copy_as` and `mixin` operations
//! - [`PathExpr`] and [`Delimiter`]: parsed path expressions
//! - [`PathResolver`]: segment-by-segment traversal with optional upsert
//! - [`AccessorConfig`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use dotpath::{Accessor, Error};
//! use serde_json::json;
//!
//! let mut accessor = Accessor::new(json!({"a": 5}));
//!
//! // Writes create missing containers; "0" asks for a sequence.
//! accessor.update("b.c.0", json!(10)).unwrap();
//! assert_eq!(accessor.root(), &json!({"a": 5, "b": {"c": [10]}}));
//!
//! // Missing paths read as absent, scalars in the way are errors.
//! assert_eq!(accessor.find("x.y").unwrap(), None);
//! assert!(matches!(accessor.find("a.b"), Err(Error::NotIndexable { .. })));
//! ```

pub mod accessor;
pub mod config;
pub mod error;
pub mod path;
pub mod value;

// Re-export key types at crate root for convenience
pub use accessor::{Accessor, UpdateOptions};
pub use config::{AccessorConfig, ConfigBuilder, Delivery};
pub use error::{Error, Result};
pub use path::{Delimiter, Depth, PathExpr, PathResolver};
pub use value::ValueKind;
