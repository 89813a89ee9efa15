use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppState, Transaction};

#[utoipa::path(
    get,
    path = "/api/transactions/{user_id}",
    tag = "Transactions",
    params(
        ("user_id" = i32, Path, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "Transactions, most recent first", body = [Transaction]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn user_transactions(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.store.transactions_for_user(user_id)?;

    Ok(Json(transactions))
}
