//! Configuration schema definitions.
//!
//! This module defines the settings an [`Accessor`](crate::Accessor) can be
//! built from: the segment delimiter, the default upsert policy for writes,
//! and how callback outcomes are delivered.

use serde::{Deserialize, Serialize};

/// Accessor configuration.
///
/// Every field is optional so that partial configurations from different
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use dotpath::config::{AccessorConfig, Delivery};
///
/// let config: AccessorConfig = serde_yaml::from_str("delimiter: /\ndelivery: deferred\n").unwrap();
/// assert_eq!(config.delimiter, Some("/".to_string()));
/// assert_eq!(config.delivery, Some(Delivery::Deferred));
/// assert_eq!(config.upsert, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AccessorConfig {
    /// Segment delimiter for path expressions (default `.`).
    pub delimiter: Option<String>,

    /// Whether writes create missing intermediate containers (default true).
    pub upsert: Option<bool>,

    /// How callback outcomes are delivered (default immediate).
    pub delivery: Option<Delivery>,
}

/// Delivery mode for callback-style operations.
///
/// # Examples
///
/// ```
/// use dotpath::config::Delivery;
///
/// assert_eq!(Delivery::default(), Delivery::Immediate);
/// assert_eq!(Delivery::Deferred.to_string(), "deferred");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    /// Invoke the callback before the operation returns.
    #[default]
    Immediate,
    /// Queue the callback until the accessor's pending queue is drained.
    Deferred,
}

impl Delivery {
    /// Parses a delivery mode from a string (case-insensitive).
    ///
    /// Returns `None` if the string is not recognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "immediate" => Some(Self::Immediate),
            "deferred" => Some(Self::Deferred),
            _ => None,
        }
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Immediate => write!(f, "immediate"),
            Self::Deferred => write!(f, "deferred"),
        }
    }
}
