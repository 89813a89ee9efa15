use axum::extract::State;
use axum::Json;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{AppState, Contact, CreateContactRequest, NewContact};

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact saved", body = Contact),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Owning user not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    if state.store.user(payload.user_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "User {} not found",
            payload.user_id
        )));
    }

    // No uniqueness constraint on (user, account): the same recipient may be
    // saved twice.
    let contact = state.store.create_contact(NewContact {
        user_id: payload.user_id,
        name: payload.name,
        account: payload.account,
        bank: payload.bank,
        is_frequent: payload.is_frequent,
    })?;

    Ok((StatusCode::CREATED, Json(contact)))
}
