//! Router assembly for the TeachWise HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the page may be served from another origin), which
/// also answers OPTIONS pre-flight requests with an empty 200.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::frontend::index))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/generate-question",
            post(handlers::generation::generate_question),
        )
        .route(
            "/api/generate-scenario",
            post(handlers::generation::generate_scenario),
        )
        .route(
            "/api/student-response",
            post(handlers::session::student_response),
        )
        .route(
            "/api/evaluate-session",
            post(handlers::session::evaluate_session),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
