use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use blog_client::{ConnectOptions, ContentClient};
use tracing::{info, warn};

mod infrastructure;
mod presentation;
mod server;

use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let options = ConnectOptions {
        request_timeout: Some(Duration::from_secs(settings.rpc_timeout_secs)),
        concurrency_limit: Some(settings.rpc_concurrency_limit),
        ..ConnectOptions::default()
    };
    let client = ContentClient::connect(&settings.blog_service_addr, &options)
        .await
        .with_context(|| format!("Unable to connect to server {}", settings.blog_service_addr))?;
    info!("Connected to {}", client.endpoint());

    let state = AppState::new(Arc::new(client));
    server::run_http(&settings, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
