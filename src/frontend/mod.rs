// src/frontend/mod.rs
//
// Server side of the web app: reverse-proxy API routes plus the page loader.

pub mod pages;
pub mod proxy;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use tower_http::trace::TraceLayer;

pub type SharedFrontend = Arc<FrontendState>;

pub struct FrontendState {
    pub client: Client,
    /// Base URL of the backend relay / upstream resources (PUBLIC_API_URL).
    pub api_url: String,
    /// This server's own origin; the page loader fetches its API routes here.
    pub self_origin: String,
}

impl FrontendState {
    pub fn new(api_url: impl Into<String>, self_origin: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            self_origin: self_origin.into(),
        }
    }
}

pub fn create_router() -> Router<SharedFrontend> {
    Router::new()
        .route("/", get(pages::index_handler))
        .route("/api/ai", post(proxy::ai_handler))
        .route("/api/nodeData", get(proxy::node_data_handler))
        .route("/api/nodes", get(proxy::nodes_handler))
        .layer(TraceLayer::new_for_http())
}
