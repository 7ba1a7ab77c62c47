use std::sync::Arc;

use dotenvy::dotenv;
use gemini_relay::config::{BACKEND_PORT, BackendConfig};
use gemini_relay::routes;
use gemini_relay::services::gemini::{GeminiClient, GeminiConfig};
use gemini_relay::state::AppState;
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

    let config = BackendConfig::from_env()?;
    let gemini = GeminiClient::new(GeminiConfig::new(config.api_key, config.model));
    let state = Arc::new(AppState::new(gemini));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let address = format!("0.0.0.0:{BACKEND_PORT}");
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {address}: {e}"))?;

    info!("✅ Gemini server running on port {BACKEND_PORT}");
    axum::serve(listener, app).await?;

    Ok(())
}
