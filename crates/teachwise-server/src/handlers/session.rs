//! Roleplay chat and session evaluation handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use teachwise_core::EvaluationResult;

use crate::error::ApiError;
use crate::schema::session::{EvaluateSessionRequest, StudentResponse, StudentResponseRequest};
use crate::state::AppState;

/// `POST /api/student-response`
pub async fn student_response(
    State(state): State<AppState>,
    payload: Result<Json<StudentResponseRequest>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Json(req) = payload?;
    let reply = state.service.generate_student_response(req).await?;
    Ok(Json(reply))
}

/// `POST /api/evaluate-session`
pub async fn evaluate_session(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateSessionRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, ApiError> {
    let Json(req) = payload?;
    let evaluation = state.service.evaluate_session(req).await?;
    Ok(Json(evaluation))
}
