pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;
use crate::ui::handlers as page;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(page::handle_index).post(page::handle_submit))
        .route("/export", post(page::handle_export_form))
        // JSON API
        .route("/api/generate-qa", post(handlers::handle_generate_qa))
        .route("/api/export", post(handlers::handle_export))
        .with_state(state)
}
