use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::{RelayError, error_response};

use super::{FrontendState, SharedFrontend, proxy::NODE_ERROR};

/// `GET /`: run the page loader and hand its result to the page as data.
pub async fn index_handler(State(state): State<SharedFrontend>) -> Response {
    match load_node_data(&state).await {
        Ok(node_data) => Json(serde_json::json!({ "nodeData": node_data })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Page load error");
            error_response(NODE_ERROR)
        }
    }
}

/// Page loader: one fetch of this server's own nodeData route.
pub async fn load_node_data(state: &FrontendState) -> Result<Value, RelayError> {
    let response = state
        .client
        .get(format!("{}/api/nodeData", state.self_origin))
        .send()
        .await?;

    let data = response.json().await?;
    Ok(data)
}
