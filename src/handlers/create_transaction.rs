use axum::extract::State;
use axum::Json;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{AppState, CreateTransactionRequest, Transaction};
use crate::services::TransactionService;

#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded; a send also debits the owner's balance", body = Transaction),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Owning user not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let transaction = TransactionService::record(&state, payload)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
