use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppState, Conversation};

#[utoipa::path(
    get,
    path = "/api/conversations/{user_id}",
    tag = "Assistant",
    params(
        ("user_id" = i32, Path, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "Assistant exchanges, most recent first", body = [Conversation]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn user_conversations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let conversations = state.store.conversations_for_user(user_id)?;

    Ok(Json(conversations))
}
