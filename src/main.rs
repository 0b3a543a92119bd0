//! `throughput-engine` server binary.
//!
//! Loads the region configuration from `REGION_CONFIG_DIR` (default
//! `./config/regions`) and serves the API on `LISTEN_ADDR` (default
//! `0.0.0.0:8080`).

use tracing::info;

use throughput_engine::api::{AppState, create_router};
use throughput_engine::config::ConfigLoader;
use throughput_engine::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config_dir =
        std::env::var("REGION_CONFIG_DIR").unwrap_or_else(|_| "./config/regions".to_string());
    let listen = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(regions = ?config.regions(), "loaded region configuration");

    let state = AppState::new(config, MemoryStore::new());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!(%listen, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
