use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::AppError, message::ChatRequest, services::assistant, state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ChatRequest>,
) -> Result<Response, AppError> {
    // The loading probe is answered before any validation.
    if payload.show_loading {
        return Ok(Json(json!({
            "sources": [],
            "summary": "Thinking...",
            "points": [],
        }))
        .into_response());
    }

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let api_key = state
        .config
        .openai_api_key
        .clone()
        .ok_or(AppError::MissingApiKey)?;

    let turn_id = Uuid::new_v4();
    // The auth provider runs in front of us; we only see its identity header.
    match headers.get("x-user-id").and_then(|v| v.to_str().ok()) {
        Some(user) => tracing::info!(
            %turn_id,
            user,
            history_len = payload.history.len(),
            "chat turn from authenticated user"
        ),
        None => tracing::info!(
            %turn_id,
            history_len = payload.history.len(),
            "chat turn without user identity"
        ),
    }

    let reply = assistant::complete(
        &state.http,
        &state.config,
        &api_key,
        trimmed,
        &payload.history,
    )
    .await?;

    tracing::debug!(%turn_id, summary_len = reply.summary.len(), "chat turn completed");
    Ok(Json(reply).into_response())
}
