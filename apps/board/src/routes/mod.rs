pub mod dashboard;
pub mod health;

use axum::{routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::handle_dashboard))
        .route("/health", get(health::health_handler))
        .route("/api/v1/topics", get(dashboard::handle_topics))
        .fallback(not_found)
        .with_state(state)
}
