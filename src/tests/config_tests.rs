//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, LogConfig, QueryConfig, RecordsConfig, SearchConfig, Validate};
use crate::error::config::ConfigError;
use crate::search::SearchStrategy;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = SearchConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.records.path, PathBuf::from("cities.txt"));
    assert_eq!(config.query.limit, 10);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = SearchConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.query.limit = 5000;
    assert!(config.validate().is_err());

    config.query.limit = 5;
    config.records.path = PathBuf::new();
    assert!(config.validate().is_err());

    config.records.path = PathBuf::from("towns.txt");
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [records]
    path = "/data/towns.txt"

    [query]
    limit = 25
    strategy = "scan"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.records.path, PathBuf::from("/data/towns.txt"));
    assert_eq!(config.query.limit, 25);
    assert_eq!(config.query.strategy, SearchStrategy::Scan);

    // Other values should be defaults
    assert_eq!(config.query.max_limit, 1000);
    assert_eq!(config.log.level, "info");
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "log": { "level": "warn", "json": true } }"#).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.log.level, "warn");
    assert!(config.log.json);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("env_test.toml");
    fs::write(&config_path, "[query]\nlimit = 3\n").unwrap();

    std::env::set_var("TEST_ENV__QUERY__LIMIT", "7");
    std::env::set_var("TEST_ENV__RECORDS__PATH", "env-cities.txt");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.query.limit, 7);
    assert_eq!(config.records.path, PathBuf::from("env-cities.txt"));

    std::env::remove_var("TEST_ENV__QUERY__LIMIT");
    std::env::remove_var("TEST_ENV__RECORDS__PATH");
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(p)) if p == config_path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    fs::write(&config_path, "[query\nlimit = ten\"").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that unsupported extensions are rejected before parsing.
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "limit=3").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a file producing an invalid configuration fails validation.
#[test]
fn test_loaded_config_is_validated() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("too_big.toml");
    fs::write(&config_path, "[query]\nlimit = 20\nmax_limit = 10\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_VALIDATE");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test that the loader works without any file.
#[test]
fn test_load_defaults_only() {
    let config = ConfigLoader::new(None::<PathBuf>, "TEST_DEFAULTS").load().unwrap();
    assert_eq!(config.query.limit, QueryConfig::default().limit);
    assert_eq!(config.records.path, RecordsConfig::default().path);
    assert_eq!(config.log.level, LogConfig::default().level);
}

/// Test that the default configuration serializes to TOML and loads back.
#[test]
fn test_generated_config_loads() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");
    let toml = toml::to_string_pretty(&SearchConfig::default()).unwrap();
    fs::write(&config_path, toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config.query.strategy, SearchStrategy::Trie);
}
