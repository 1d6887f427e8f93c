//! Health check response.

use serde::Serialize;

/// `GET /health` body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `"available"` or `"missing"`.
    pub api_key: &'static str,
    pub features: Vec<&'static str>,
}
