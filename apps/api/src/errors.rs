use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Malformed model output is NOT represented here: the practice generator
/// recovers it internally with the fallback plan, so it never crosses the
/// service boundary as a failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Generative model not configured")]
    ModelNotConfigured,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::ModelNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MODEL_NOT_CONFIGURED",
                "AI model not configured. Please check the GEMINI_API_KEY environment variable."
                    .to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    format!("Failed to generate technique: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
