// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. A missing or null `message` falls back to the
/// fixed placeholder prompt.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Body of the frontend's `POST /api/ai` route.
#[derive(Debug, Default, Deserialize)]
pub struct AiRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
