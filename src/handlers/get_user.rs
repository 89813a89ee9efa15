use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppState, User};

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .store
        .user(id)?
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(user))
}
