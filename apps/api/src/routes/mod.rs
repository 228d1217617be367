pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/reports/compose", post(handlers::handle_compose))
        .route("/api/v1/reports/tiers/:score", get(handlers::handle_tier))
        .with_state(state)
}
