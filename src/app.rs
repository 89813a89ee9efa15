use crate::config::{build_cors, swagger_config::ApiDoc};
use crate::handlers::{
    create_contact::create_contact, create_conversation::create_conversation,
    create_transaction::create_transaction, create_user::create_user,
    frequent_contacts::frequent_contacts, get_user::get_user, health::health_check,
    user_contacts::user_contacts, user_conversations::user_conversations,
    user_transactions::user_transactions,
};
use crate::models::AppState;
use axum::routing::{get, post};
use axum::Router;
use eyre::Report;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Result<Router, Report> {
    let cors = build_cors()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(health_check))
        .route("/api/user/{id}", get(get_user))
        .route("/api/users", post(create_user))
        .route("/api/transactions", post(create_transaction))
        .route("/api/transactions/{user_id}", get(user_transactions))
        .route("/api/contacts", post(create_contact))
        .route("/api/contacts/{user_id}", get(user_contacts))
        .route("/api/contacts/{user_id}/frequent", get(frequent_contacts))
        .route("/api/conversations", post(create_conversation))
        .route("/api/conversations/{user_id}", get(user_conversations))
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(cors)
        .with_state(state);

    Ok(router)
}
