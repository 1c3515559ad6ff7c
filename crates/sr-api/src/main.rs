//! Showroom API: HTTP front end for the dealership assistant.
//!
//! Serves the turn interface, call sessions and the booking dashboard.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sr_api::config::ApiConfig;
use sr_api::routes::build_router;
use sr_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "showroom-api starting");

    let config = ApiConfig::from_env();
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
