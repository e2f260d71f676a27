//! Configuration loading tests
//!
//! These mutate the process environment, so they run serially.

use std::io::Write;

use assert_matches::assert_matches;
use campmap::backend::server::config::{load_config, CONFIG_FILE_VAR};
use campmap::shared::ConfigError;
use serial_test::serial;

const VARS: [&str; 5] = [
    CONFIG_FILE_VAR,
    "SERVER_PORT",
    "DATABASE_URL",
    "GIS_STATE",
    "PASSWORD_COST",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_sources() {
    clear_env();

    let config = load_config().unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.database_url, "sqlite://camping.db");
    assert_eq!(config.gis.state, "CO");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
port = 8080
database_url = "sqlite://from-file.db"

[gis]
state = "UT"
"#
    )
    .unwrap();

    std::env::set_var(CONFIG_FILE_VAR, file.path());
    std::env::set_var("SERVER_PORT", "9090");

    let config = load_config().unwrap();
    clear_env();

    assert_eq!(config.port, 9090);
    assert_eq!(config.database_url, "sqlite://from-file.db");
    assert_eq!(config.gis.state, "UT");
    assert_eq!(config.gis.result_count, 1000);
}

#[test]
#[serial]
fn test_invalid_env_value() {
    clear_env();
    std::env::set_var("SERVER_PORT", "not-a-port");

    let result = load_config();
    clear_env();

    assert_matches!(result, Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
}

#[test]
#[serial]
fn test_invalid_state_fails_validation() {
    clear_env();
    std::env::set_var("GIS_STATE", "Colorado");

    let result = load_config();
    clear_env();

    assert_matches!(result, Err(ConfigError::InvalidValue { key: "gis.state", .. }));
}

#[test]
#[serial]
fn test_missing_config_file() {
    clear_env();
    std::env::set_var(CONFIG_FILE_VAR, "/nonexistent/campmap.toml");

    let result = load_config();
    clear_env();

    assert_matches!(result, Err(ConfigError::Io(_)));
}
