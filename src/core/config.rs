use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::server_config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::core::errors::ConfigError;

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const HOST_ENV: &str = "REGISTRY_HOST";
pub const PORT_ENV: &str = "REGISTRY_PORT";

/// Listen address of the registry server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,

    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

/// On-disk layout; server settings live under `[server]`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    /// Resolve configuration from defaults, an optional TOML file and the
    /// environment, in that order.
    ///
    /// An `explicit` path must exist. A path taken from `CONFIG_PATH` is
    /// skipped with a warning when the file is missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match std::env::var(CONFIG_PATH_ENV) {
                Ok(path) if Path::new(&path).exists() => Self::from_file(Path::new(&path))?,
                Ok(path) => {
                    tracing::warn!("Config file {} not found, using defaults", path);
                    Self::default()
                }
                Err(_) => Self::default(),
            },
        };

        config.apply_env_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(path),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.server)
    }

    /// Override fields from `REGISTRY_HOST` / `REGISTRY_PORT` as resolved by `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }

        if let Some(value) = lookup(PORT_ENV) {
            self.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var: PORT_ENV, value })?;
        }

        Ok(())
    }

    /// `host:port` string accepted by `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}
