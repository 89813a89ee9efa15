use axum::extract::State;
use axum::Json;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{AppState, CreateUserRequest, NewUser, User};

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input or duplicate email"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    // Emails are unique; first-match linear scan is all the store offers.
    if state.store.user_by_email(&payload.email)?.is_some() {
        return Err(ApiError::InvalidInput("Email already registered".to_string()));
    }

    let user = state.store.create_user(NewUser {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        bank_account: payload.bank_account,
        balance: payload.balance,
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}
