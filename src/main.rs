//! evidence-search: a search proxy in front of the Serper API
//!
//! This is the main entry point for the application.

use anyhow::Result;
use evidence_search::{
    config,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting evidence-search v{}", evidence_search::VERSION);

    // Load configuration
    let settings = config::load()?;
    info!("Running in {} mode", settings.general.environment);
    if settings.upstream.api_key().is_none() {
        warn!("SERPER_API_KEY is not set; search requests will fail until it is configured");
    }

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
