//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `DOTPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{AccessorConfig, Delivery};
use crate::error::{Error, Result};
use std::env;

/// Environment variable overriding the segment delimiter.
pub const DELIMITER_VAR: &str = "DOTPATH_DELIMITER";
/// Environment variable overriding the default upsert policy.
pub const UPSERT_VAR: &str = "DOTPATH_UPSERT";
/// Environment variable overriding the delivery mode.
pub const DELIVERY_VAR: &str = "DOTPATH_DELIVERY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use dotpath::config::{AccessorConfig, EnvironmentConfig};
///
/// let mut config = AccessorConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut AccessorConfig) -> Result<()> {
        if let Ok(delimiter) = env::var(DELIMITER_VAR) {
            config.delimiter = Some(delimiter);
        }

        if let Ok(val) = env::var(UPSERT_VAR) {
            config.upsert = Some(Self::parse_bool(UPSERT_VAR, &val)?);
        }

        if let Ok(val) = env::var(DELIVERY_VAR) {
            config.delivery = Some(Delivery::parse(&val).ok_or_else(|| Error::Validation {
                field: DELIVERY_VAR.into(),
                message: format!("Invalid delivery mode: '{val}' (expected immediate/deferred)"),
            })?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
