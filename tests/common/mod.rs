use axum::Router;
use silverbank::app::create_router;
use silverbank::models::AppState;
use std::sync::Arc;

/// Router over an empty in-memory store.
#[allow(dead_code)]
pub fn empty_app() -> Router {
    create_test_app(Arc::new(AppState::in_memory()))
}

/// Router over the seeded demo account (user 1, balance 2847500).
#[allow(dead_code)]
pub fn seeded_app() -> Router {
    create_test_app(Arc::new(AppState::with_sample_data()))
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    create_router(state).expect("failed to build test router")
}
