use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner, handy as a liveness probe.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Equanimity API is running",
        "status": "healthy"
    }))
}

/// GET /health
/// Reports process status and whether the model client was configured
/// at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gemini_configured": state.llm.is_some(),
        "api_version": env!("CARGO_PKG_VERSION")
    }))
}
