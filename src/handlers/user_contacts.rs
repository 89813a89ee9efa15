use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppState, Contact};

#[utoipa::path(
    get,
    path = "/api/contacts/{user_id}",
    tag = "Contacts",
    params(
        ("user_id" = i32, Path, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "Saved contacts, insertion order", body = [Contact]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn user_contacts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.contacts_for_user(user_id)?;

    Ok(Json(contacts))
}
