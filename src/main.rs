//! HTTP server for the Pet Age Engine.
//!
//! Environment:
//! - `PET_AGE_CONFIG_DIR`: age table directory (default `./config/age_tables`);
//!   the built-in tables are used when it does not exist
//! - `PET_AGE_BIND`: listen address (default `0.0.0.0:3000`)

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use pet_age_engine::api::{AppState, create_router};
use pet_age_engine::config::ConfigLoader;
use pet_age_engine::logging::init_logger;
use tracing::{info, warn};

const DEFAULT_CONFIG_DIR: &str = "./config/age_tables";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let config_dir =
        env::var("PET_AGE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = if Path::new(&config_dir).exists() {
        ConfigLoader::load(&config_dir)
            .with_context(|| format!("failed to load age tables from {}", config_dir))?
    } else {
        warn!(path = %config_dir, "Config directory not found, using built-in tables");
        ConfigLoader::builtin().context("failed to load built-in age tables")?
    };
    info!(
        name = %config.metadata().name,
        version = %config.metadata().version,
        "Age tables loaded"
    );

    let bind = env::var("PET_AGE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!(address = %bind, "Listening");

    axum::serve(listener, create_router(AppState::new(config)))
        .await
        .context("server error")?;
    Ok(())
}
