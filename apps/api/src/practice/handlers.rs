//! Axum route handlers for technique generation.

use axum::{extract::State, Json};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

use crate::errors::AppError;
use crate::practice::generator::generate_plan;
use crate::practice::plan::TechniquePlan;
use crate::state::AppState;

/// Request body: one keyword string per answered question, keyed by the
/// question ordinal as a string.
#[derive(Debug, Deserialize)]
pub struct AssessmentAnswers {
    pub answers: HashMap<String, String>,
}

/// POST /generate-technique
///
/// Generates a personalized 3-day equanimity practice from assessment
/// answers. Responds 500 when the model client is unconfigured or the
/// upstream call fails; malformed model output is answered with the
/// fallback plan, never an error.
pub async fn handle_generate_technique(
    State(state): State<AppState>,
    Json(assessment): Json<AssessmentAnswers>,
) -> Result<Json<TechniquePlan>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::ModelNotConfigured)?;

    info!(
        "Generating technique from {} answered questions",
        assessment.answers.len()
    );

    let plan = generate_plan(llm, &assessment.answers).await?;

    Ok(Json(plan))
}
