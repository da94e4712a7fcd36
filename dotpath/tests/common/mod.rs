//! Common test utilities for integration tests.
//!
//! This module provides sample documents and an environment guard shared by
//! the integration test suites.

use std::env;

use serde_json::{json, Value};

/// A small document mixing mappings and sequences.
#[allow(dead_code)]
pub fn sample_document() -> Value {
    json!({
        "service": {
            "name": "api",
            "ports": [8080, 8443],
            "tags": {"tier": "web"}
        },
        "replicas": 3,
        "owners": [
            {"name": "ada", "email": "ada@example.com"},
            {"name": "grace"}
        ]
    })
}

/// The document from the read examples: a single deep branch.
#[allow(dead_code)]
pub fn deep_document() -> Value {
    json!({"a": {"b": {"c": [10]}}})
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
