use std::time::Duration;

use clap::Parser;
use searoute_core::{SeaNetworkConfig, SeaRouter, create_sea_network};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod api;
mod config;

use api::AppState;
use config::{Cli, ConfigError, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(&cli)?;
    let network_path = config
        .network_path
        .clone()
        .ok_or(ConfigError::MissingNetwork)?;

    let network_config = SeaNetworkConfig {
        network_path,
        snap_threshold_km: config.snap_threshold_km,
    };
    // Loading parses the whole dataset, run it outside the async workers
    let network = tokio::task::spawn_blocking(move || create_sea_network(&network_config)).await??;
    tracing::info!("{}", network.network_info());

    let state = AppState {
        router: SeaRouter::new(network),
        default_units: config.default_units,
    };
    let app = api::routes(
        state,
        Duration::from_secs(config.request_timeout_secs),
        config.max_concurrent_requests,
    );

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
