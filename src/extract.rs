use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` with the rejection rewritten to [`ApiError`], so a body that
/// fails to parse or deserialize comes back as 400 rather than axum's 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
