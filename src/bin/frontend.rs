use std::sync::Arc;

use dotenvy::dotenv;
use gemini_relay::config::{FRONTEND_PORT, FrontendConfig};
use gemini_relay::frontend::{self, FrontendState};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = FrontendConfig::from_env();
    let state = Arc::new(FrontendState::new(
        config.api_url,
        format!("http://127.0.0.1:{FRONTEND_PORT}"),
    ));

    let app = frontend::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let address = format!("0.0.0.0:{FRONTEND_PORT}");
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {address}: {e}"))?;

    info!("Frontend running on port {FRONTEND_PORT}");
    axum::serve(listener, app).await?;

    Ok(())
}
