// src/state.rs
use std::sync::Arc;

use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

/// Backend process state. The Gemini client is built once at startup and never
/// mutated, so it is shared freely across request tasks.
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }
}
