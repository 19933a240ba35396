pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::ForkRules;
use crate::db::Database;
use crate::drafts::DraftStore;
use crate::errors::OpenQuestError;

#[derive(Clone)]
pub struct AppState {
    pub drafts: Arc<dyn DraftStore>,
    pub rules: Arc<ForkRules>,
}

impl AppState {
    pub fn new(drafts: Arc<dyn DraftStore>, rules: ForkRules) -> Self {
        Self { drafts, rules: Arc::new(rules) }
    }
}

pub async fn create_app_state(db_path: &str, rules: ForkRules) -> Result<AppState, OpenQuestError> {
    let db = Database::new(db_path)?;
    Ok(AppState::new(Arc::new(db), rules))
}

/// Largest accepted request body. Problem text is a few kilobytes at most.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/forks/validate", axum::routing::post(routes::forks::validate))
        .route("/api/forks/difference", axum::routing::post(routes::forks::difference))
        .route("/api/forks/indicator/{score}", axum::routing::get(routes::forks::indicator))
        .route("/api/forks/rules", axum::routing::get(routes::forks::get_rules))
        .route(
            "/api/drafts/{key}",
            axum::routing::get(routes::drafts::load_draft)
                .put(routes::drafts::save_draft)
                .delete(routes::drafts::clear_draft),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(auth::api_auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
