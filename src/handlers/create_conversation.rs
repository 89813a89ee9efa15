use axum::extract::State;
use axum::Json;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{AppState, Conversation, CreateConversationRequest};
use crate::services::AssistantService;

#[utoipa::path(
    post,
    path = "/api/conversations",
    tag = "Assistant",
    request_body = CreateConversationRequest,
    responses(
        (status = 201, description = "Exchange recorded, generated response included", body = Conversation),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Owning user not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_conversation(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<CreateConversationRequest>,
) -> Result<(StatusCode, Json<Conversation>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let conversation = AssistantService::record(&state, payload)?;

    Ok((StatusCode::CREATED, Json(conversation)))
}
