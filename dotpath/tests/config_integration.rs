//! Integration tests for the configuration system.
//!
//! Covers file loading, environment overrides, precedence between layers,
//! and building accessors from the merged result.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so those tests must not
//! interleave.

mod common;

use common::EnvGuard;
use dotpath::config::{AccessorConfig, ConfigBuilder, ConfigLoader, Delivery};
use dotpath::{Accessor, Error};
use serde_json::json;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get path to test fixtures.
fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(relative)
}

#[test]
fn test_load_fixture() {
    let config = ConfigLoader::load_file(&fixture_path("slash.yaml")).unwrap();
    assert_eq!(config.delimiter, Some("/".to_string()));
    assert_eq!(config.upsert, Some(false));
    assert_eq!(config.delivery, None);
}

#[test]
fn test_unknown_field_rejected() {
    let err = ConfigLoader::load_file(&fixture_path("unknown_field.yaml")).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
#[serial]
fn test_files_layer_in_order() {
    let _delimiter = EnvGuard::remove("DOTPATH_DELIMITER");
    let _upsert = EnvGuard::remove("DOTPATH_UPSERT");
    let _delivery = EnvGuard::remove("DOTPATH_DELIVERY");

    let config = ConfigBuilder::new()
        .with_file(fixture_path("slash.yaml"))
        .with_file(fixture_path("deferred.yaml"))
        .build()
        .unwrap();

    assert_eq!(config.delimiter, Some("/".to_string()));
    assert_eq!(config.upsert, Some(false));
    assert_eq!(config.delivery, Some(Delivery::Deferred));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _delimiter = EnvGuard::new("DOTPATH_DELIMITER", "::");
    let _upsert = EnvGuard::new("DOTPATH_UPSERT", "true");
    let _delivery = EnvGuard::remove("DOTPATH_DELIVERY");

    let config = ConfigBuilder::new()
        .with_file(fixture_path("slash.yaml"))
        .build()
        .unwrap();

    assert_eq!(config.delimiter, Some("::".to_string()));
    assert_eq!(config.upsert, Some(true));
}

#[test]
#[serial]
fn test_programmatic_overrides_env() {
    let _delimiter = EnvGuard::new("DOTPATH_DELIMITER", "::");
    let _upsert = EnvGuard::remove("DOTPATH_UPSERT");
    let _delivery = EnvGuard::new("DOTPATH_DELIVERY", "deferred");

    let config = ConfigBuilder::new()
        .with_config(AccessorConfig {
            delimiter: Some("|".to_string()),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.delimiter, Some("|".to_string()));
    assert_eq!(config.delivery, Some(Delivery::Deferred));
}

#[test]
#[serial]
fn test_empty_env_delimiter_rejected() {
    let _delimiter = EnvGuard::new("DOTPATH_DELIMITER", "");
    let _upsert = EnvGuard::remove("DOTPATH_UPSERT");
    let _delivery = EnvGuard::remove("DOTPATH_DELIVERY");

    let err = ConfigBuilder::new().build().unwrap_err();
    assert!(matches!(err, Error::Validation { field, .. } if field == "delimiter"));
}

#[test]
#[serial]
fn test_invalid_env_bool_rejected() {
    let _delimiter = EnvGuard::remove("DOTPATH_DELIMITER");
    let _upsert = EnvGuard::new("DOTPATH_UPSERT", "perhaps");
    let _delivery = EnvGuard::remove("DOTPATH_DELIVERY");

    let err = ConfigBuilder::new().build().unwrap_err();
    assert!(matches!(err, Error::Validation { field, .. } if field == "DOTPATH_UPSERT"));
}

#[test]
fn test_accessor_from_built_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dotpath.yaml");
    fs::write(&path, "delimiter: /\nupsert: false\n").unwrap();

    let config = ConfigBuilder::new()
        .skip_env()
        .with_file(&path)
        .build()
        .unwrap();
    let mut accessor = Accessor::from_config(json!({"a.b": {}}), &config).unwrap();

    accessor.update("a.b/c", json!(1)).unwrap();
    assert_eq!(accessor.root(), &json!({"a.b": {"c": 1}}));

    // Upsert is off by configuration.
    assert!(accessor.update("x/y", json!(1)).unwrap_err().is_not_found());
}
