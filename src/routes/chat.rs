use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::error_response,
    message::{ChatRequest, ChatResponse, ErrorResponse},
    state::SharedState,
};

const DEFAULT_PROMPT: &str = "Hello";
const CHAT_ERROR: &str = "Failed to connect to Gemini API";

/// `POST /api/chat`. An empty body is treated as an empty request, so the
/// prompt falls back to the placeholder. Every provider failure is caught here
/// and downgraded to a generic 500; the detail is logged only.
pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    let request: ChatRequest = if body.is_empty() {
        ChatRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(req) => req,
            Err(err) => {
                tracing::error!(error = %err, "Invalid chat request body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Invalid JSON body".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    };

    let prompt = request
        .message
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    match state.gemini.generate(&prompt).await {
        Ok(reply) => Json(ChatResponse { reply }).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Gemini API error");
            error_response(CHAT_ERROR)
        }
    }
}
