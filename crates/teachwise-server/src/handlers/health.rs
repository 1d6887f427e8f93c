//! Health check handler.

use axum::extract::State;
use axum::Json;

use crate::schema::health::HealthResponse;
use crate::state::AppState;

/// API version reported by the health check.
pub const API_VERSION: &str = "2.0";

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let api_key = if state.service.is_available() {
        "available"
    } else {
        "missing"
    };

    Json(HealthResponse {
        status: "healthy",
        version: API_VERSION,
        api_key,
        features: vec![
            "Practice Question Generation",
            "Teaching Simulation",
            "AI Student Responses",
            "Session Evaluation",
            "Traditional Chinese Support",
        ],
    })
}
