pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze-clause", post(handlers::handle_suggest))
        .route("/analyze_changes", post(handlers::handle_analyze_changes))
        .route(
            "/analyze_clause_changes",
            post(handlers::handle_analyze_changes),
        )
        .route(
            "/analyze_changes_batch",
            post(handlers::handle_analyze_changes_batch),
        )
        .with_state(state)
}
