pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::practice::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/generate-technique",
            post(handlers::handle_generate_technique),
        )
        .with_state(state)
}
