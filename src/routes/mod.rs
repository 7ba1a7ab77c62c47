// src/routes/mod.rs
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub const BANNER: &str = "✅ Gemini server is running!";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { BANNER }))
        .route("/api/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}
