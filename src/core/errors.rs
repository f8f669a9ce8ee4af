use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}
