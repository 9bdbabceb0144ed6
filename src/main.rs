use std::sync::Arc;
use std::time::Duration;

use ride_console::api;
use ride_console::config::Config;
use ride_console::error::AppError;
use ride_console::state::AppState;
use ride_console::upstream::HttpRideApi;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let ride_api = HttpRideApi::new(
        config.ride_api_url.clone(),
        Duration::from_secs(config.ride_api_timeout_secs),
    )
    .map_err(|err| AppError::Internal(format!("failed to build ride api client: {err}")))?;

    tracing::info!(ride_api = ride_api.base_url(), "ride api client ready");

    let shared_state = Arc::new(AppState::new(Arc::new(ride_api), config.event_buffer_size));
    let app = api::rest::router_with_static(shared_state, &config.static_dir);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
