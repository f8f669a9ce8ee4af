//! Server configuration loading from files and the environment

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use user_registry::core::config::{ServerConfig, CONFIG_PATH_ENV, HOST_ENV, PORT_ENV};
use user_registry::core::ConfigError;

fn clear_env() {
    std::env::remove_var(CONFIG_PATH_ENV);
    std::env::remove_var(HOST_ENV);
    std::env::remove_var(PORT_ENV);
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_load_defaults_without_env() {
    clear_env();
    let config = ServerConfig::load(None).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
#[serial]
fn test_load_explicit_file() {
    clear_env();
    let file = write_config("[server]\nhost = \"127.0.0.1\"\nport = 9191\n");
    let config = ServerConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:9191");
}

#[test]
#[serial]
fn test_load_explicit_missing_file_fails() {
    clear_env();
    let path = std::path::Path::new("/nonexistent/registry.toml");
    let err = ServerConfig::load(Some(path)).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
#[serial]
fn test_load_invalid_toml_fails() {
    clear_env();
    let file = write_config("[server\nport = 1");
    let err = ServerConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
#[serial]
fn test_config_path_env_is_used() {
    clear_env();
    let file = write_config("[server]\nport = 7070\n");
    std::env::set_var(CONFIG_PATH_ENV, file.path());
    let config = ServerConfig::load(None).unwrap();
    clear_env();
    assert_eq!(config.port, 7070);
}

#[test]
#[serial]
fn test_config_path_env_missing_file_falls_back() {
    clear_env();
    std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/registry.toml");
    let config = ServerConfig::load(None).unwrap();
    clear_env();
    assert_eq!(config, ServerConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = write_config("[server]\nhost = \"127.0.0.1\"\nport = 9191\n");
    std::env::set_var(PORT_ENV, "6060");
    let config = ServerConfig::load(Some(file.path()));
    clear_env();
    let config = config.unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 6060);
}

#[test]
#[serial]
fn test_env_invalid_port_fails() {
    clear_env();
    std::env::set_var(PORT_ENV, "not-a-port");
    let result = ServerConfig::load(None);
    clear_env();
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}
