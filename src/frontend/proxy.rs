use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    error::{RelayError, error_response},
    message::{AiRequest, ChatRequest},
};

use super::{FrontendState, SharedFrontend};

const AI_ERROR: &str = "Failed to reach Gemini API";
pub(super) const NODE_ERROR: &str = "Failed to fetch node data";

/// `POST /api/ai`: forward the prompt to the backend chat endpoint and relay
/// its JSON body and status verbatim.
pub async fn ai_handler(State(state): State<SharedFrontend>, body: Bytes) -> Response {
    let request: AiRequest = serde_json::from_slice(&body).unwrap_or_default();

    match forward_chat(&state, request.prompt).await {
        Ok((status, body)) => relay_json(status, body),
        Err(err) => {
            tracing::error!(error = %err, "Frontend API error");
            error_response(AI_ERROR)
        }
    }
}

async fn forward_chat(
    state: &FrontendState,
    prompt: Option<String>,
) -> Result<(StatusCode, Bytes), RelayError> {
    let response = state
        .client
        .post(format!("{}/api/chat", state.api_url))
        .json(&ChatRequest { message: prompt })
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;
    Ok((status, body))
}

/// `GET /api/nodeData`: passthrough of the upstream node-data resource.
pub async fn node_data_handler(State(state): State<SharedFrontend>) -> Response {
    proxy_get(&state, "/api/nodeData").await
}

/// `GET /api/nodes`: independent passthrough of the upstream nodes resource.
pub async fn nodes_handler(State(state): State<SharedFrontend>) -> Response {
    proxy_get(&state, "/api/nodes").await
}

// Both node routes convert any downstream failure into a structured 500 on
// every exit path.
async fn proxy_get(state: &FrontendState, path: &str) -> Response {
    match fetch_upstream(state, path).await {
        Ok((status, body)) => relay_json(status, body),
        Err(err) => {
            tracing::error!(error = %err, path, "Frontend API error");
            error_response(NODE_ERROR)
        }
    }
}

async fn fetch_upstream(
    state: &FrontendState,
    path: &str,
) -> Result<(StatusCode, Bytes), RelayError> {
    let response = state
        .client
        .get(format!("{}{}", state.api_url, path))
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;
    Ok((status, body))
}

// The upstream body goes out untouched; re-serializing through a JSON value
// would reorder object keys.
fn relay_json(status: StatusCode, body: Bytes) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
