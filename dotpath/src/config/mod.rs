//! Configuration system for dotpath.
//!
//! This module provides layered configuration for [`Accessor`](crate::Accessor)
//! settings with support for:
//! - YAML configuration files
//! - Environment variable overrides (`DOTPATH_DELIMITER`, `DOTPATH_UPSERT`,
//!   `DOTPATH_DELIVERY`)
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`DOTPATH_*`)
//! 3. Configuration files, later files first
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use dotpath::config::{AccessorConfig, ConfigBuilder, Delivery};
//! use dotpath::Accessor;
//! use serde_json::json;
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_config(AccessorConfig {
//!         delivery: Some(Delivery::Deferred),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let accessor = Accessor::from_config(json!({}), &config).unwrap();
//! assert_eq!(accessor.delivery(), Delivery::Deferred);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{AccessorConfig, Delivery};
pub use validator::ConfigValidator;
