//! Configuration resolution and graceful degradation tests
//!
//! Tests touching PUBGATE_CONFIG are marked #[serial] so they never race
//! on the process environment.

use pubgate_common::config::{
    load_toml_config, resolve_config_path, write_toml_config, LoggingConfig, CONFIG_ENV_VAR,
};
use pubgate_common::Error;
use serde::{Deserialize, Serialize};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct SampleConfig {
    logging: LoggingConfig,
    threshold: u8,
}

#[test]
#[serial]
fn test_cli_argument_wins_over_environment() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.toml");

    let resolved = resolve_config_path(Some(PathBuf::from("/tmp/from-cli.toml").as_path()));
    assert_eq!(resolved, Some(PathBuf::from("/tmp/from-cli.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_environment_variable_used_without_cli_argument() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.toml");

    let resolved = resolve_config_path(None);
    assert_eq!(resolved, Some(PathBuf::from("/tmp/from-env.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_blank_environment_variable_is_ignored() {
    env::set_var(CONFIG_ENV_VAR, "   ");

    let resolved = resolve_config_path(None);
    assert_ne!(resolved, Some(PathBuf::from("   ")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
fn test_no_path_yields_defaults() {
    let config: SampleConfig = load_toml_config(None).unwrap();
    assert_eq!(config, SampleConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config: SampleConfig = load_toml_config(Some(path.as_path())).unwrap();
    assert_eq!(config, SampleConfig::default());
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "threshold = 42\n").unwrap();

    let config: SampleConfig = load_toml_config(Some(path.as_path())).unwrap();
    assert_eq!(config.threshold, 42);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "threshold = [unterminated\n").unwrap();

    let result: Result<SampleConfig, Error> = load_toml_config(Some(path.as_path()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_write_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let original = SampleConfig {
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        threshold: 7,
    };
    write_toml_config(&original, &path).unwrap();

    let loaded: SampleConfig = load_toml_config(Some(path.as_path())).unwrap();
    assert_eq!(loaded, original);
}
