//! Entry point for the `sda-gateway` HTTP server.

use std::sync::Arc;

use sda_executor::{AdminService, ProcessRunner, PublicKeyReader};
use sda_gateway::{
    config::GatewayConfig,
    routes::{create_router, AppState},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let runner = Arc::new(ProcessRunner::from_config(&config.runner));
    let state = AppState {
        admin: AdminService::new(runner, config.runner.clone()),
        keys: Arc::new(PublicKeyReader::from_shared_dir(&config.shared_dir)),
        response_mode: config.response_mode,
    };
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        executable = %config.runner.executable.display(),
        timeout_secs = config.runner.timeout.as_secs(),
        mode = ?config.response_mode,
        "sda-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
