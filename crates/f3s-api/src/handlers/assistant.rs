//! Virtual assistant proxy handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use f3s_client::{AssistantMessage, AssistantReply};
use f3s_core::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/assistant/message
pub async fn message(
    State(state): State<AppState>,
    body: Result<Json<AssistantMessage>, JsonRejection>,
) -> ApiResult<Json<AssistantReply>> {
    let Json(message) = body.map_err(|_| AppError::validation("Invalid request body"))?;
    let reply = state.assistant.send(message).await?;
    Ok(Json(reply))
}
