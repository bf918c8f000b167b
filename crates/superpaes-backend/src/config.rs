//! Configuration loading and typed config structures for the backend.
//!
//! The canonical configuration lives in `superpaes-config.yaml` in the
//! working directory. This module defines strongly-typed structs that
//! mirror the YAML structure and provides a loader that reads the file,
//! falls back to defaults when it is absent, and applies environment
//! overrides for the bind address.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an invalid value.
    #[error("invalid environment override: {message}")]
    Env {
        /// Description of the invalid variable.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level backend configuration.
///
/// Mirrors the structure of `superpaes-config.yaml`. Every field has a
/// default, so a missing file or an empty document still yields a
/// servable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BackendConfig {
    /// Load configuration from the YAML file at `path`, falling back to
    /// defaults when the file does not exist.
    ///
    /// Environment variables override file values:
    /// - `HOST` overrides `server.host`
    /// - `PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if an existing file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if `PORT` is not a valid port number.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::parse(&contents)?
        } else {
            Self::default()
        };
        config.server.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without touching the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address the server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HttpConfig {
    /// Apply the `HOST` and `PORT` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `PORT` is set but does not parse
    /// as a port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("PORT") {
            self.port = val.parse().map_err(|e| ConfigError::Env {
                message: format!("invalid PORT: {e}"),
            })?;
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log filter used when `RUST_LOG` is unset (trace, debug, info,
    /// warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
