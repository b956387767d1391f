//! Server configuration.
//!
//! Values come from an optional JSON file, then `ADVERTS_*` environment
//! variables, then command-line flags (applied by the binary).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory for the `adverts.log` file.
    pub log_dir: PathBuf,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests at shutdown.
    pub shutdown_timeout_secs: u64,
    /// Maximum accepted request body, in bytes.
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from("data/adverts.db"),
            log_dir: PathBuf::from("logs"),
            request_timeout_secs: 10,
            shutdown_timeout_secs: 5,
            max_body_size: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `path` (if it exists) and the process
    /// environment, then validate it.
    ///
    /// A missing file is not an error; every key falls back to its default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `ADVERTS_HOST`, `ADVERTS_PORT`, `ADVERTS_DATABASE_PATH` and
    /// `ADVERTS_LOG_DIR` overrides. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("ADVERTS_HOST") {
            self.host = host;
        }
        if let Some(port) = get("ADVERTS_PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "ADVERTS_PORT",
                value: port,
            })?;
        }
        if let Some(path) = get("ADVERTS_DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }
        if let Some(dir) = get("ADVERTS_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Zero("request_timeout_secs"));
        }
        if self.shutdown_timeout_secs == 0 {
            return Err(ConfigError::Zero("shutdown_timeout_secs"));
        }
        if self.max_body_size == 0 {
            return Err(ConfigError::Zero("max_body_size"));
        }
        Ok(())
    }

    /// Override the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
