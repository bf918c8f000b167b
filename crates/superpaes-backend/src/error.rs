//! Error types for the backend binary.
//!
//! [`BackendError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

use crate::config::ConfigError;

/// Top-level error for the backend binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: superpaes_api::ServerError,
    },
}
