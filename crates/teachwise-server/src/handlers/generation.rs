//! Question and scenario generation handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use teachwise_core::{GeneratedQuestion, Scenario};

use crate::error::ApiError;
use crate::schema::generation::{GenerateQuestionRequest, GenerateScenarioRequest};
use crate::state::AppState;

/// Generates a practice question from lesson parameters.
///
/// `POST /api/generate-question`
pub async fn generate_question(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionRequest>, JsonRejection>,
) -> Result<Json<GeneratedQuestion>, ApiError> {
    let Json(req) = payload?;
    let question = state.service.generate_question(req).await?;
    Ok(Json(question))
}

/// Generates a roleplay scenario for a practice question and persona.
///
/// `POST /api/generate-scenario`
pub async fn generate_scenario(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScenarioRequest>, JsonRejection>,
) -> Result<Json<Scenario>, ApiError> {
    let Json(req) = payload?;
    let scenario = state.service.generate_scenario(req).await?;
    Ok(Json(scenario))
}
