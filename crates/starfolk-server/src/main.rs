//! StarFolk API server.
//!
//! Serves the character collection stored in `data/characters.json`
//! next to this crate.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Read the listening address from `API_HOST` / `API_PORT`
//! 3. Load the character data file (an unreadable file yields an empty store)
//! 4. Serve HTTP until Ctrl-C or SIGTERM

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use starfolk_api::{AppState, ServiceConfig};
use starfolk_store::CharacterStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server
/// cannot bind.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("starfolk-server starting");

    let config = ServiceConfig::from_env()?;
    info!(host = config.host, port = config.port, "Configuration loaded");

    let store = Arc::new(CharacterStore::open(data_path()));

    let state = Arc::new(AppState::new(store));
    starfolk_api::start_server(&config, state).await?;

    info!("starfolk-server shutdown complete");
    Ok(())
}

/// Location of the character data file, fixed relative to this crate.
fn data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("characters.json")
}
