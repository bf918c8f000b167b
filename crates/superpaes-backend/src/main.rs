//! SuperPAES Chile backend entry point.
//!
//! Boots the demo REST service: loads configuration, initializes
//! structured logging, builds the shared content state, and serves the
//! Axum API until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `superpaes-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the shared application state (content catalog + random grader)
//! 4. Bind and serve the HTTP API

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use superpaes_api::server::{ServerConfig, start_server};
use superpaes_api::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::BackendConfig;
use crate::error::BackendError;

/// Name of the optional YAML configuration file, resolved against the
/// current working directory.
const CONFIG_FILE: &str = "superpaes-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails
/// to bind or serve.
#[tokio::main]
async fn main() -> Result<(), BackendError> {
    let config_path = Path::new(CONFIG_FILE);
    let config = BackendConfig::load(config_path)?;

    // RUST_LOG wins; the configured level is the fallback.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("superpaes-backend starting");
    info!(
        config_file = config_path.exists(),
        host = config.server.host,
        port = config.server.port,
        log_level = config.logging.level,
        "configuration loaded"
    );

    let state = Arc::new(AppState::new());

    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
