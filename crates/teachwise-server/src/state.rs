//! Application state shared by all handlers.
//!
//! [`AppState`] holds the [`SimulatorService`] behind an `Arc`. The service
//! owns the model gateway handle, which is created once at startup and only
//! read afterwards, so no lock is needed.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gateway::{GeminiGateway, ModelGateway};
use crate::service::SimulatorService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The simulator service (read-only after startup).
    pub service: Arc<SimulatorService>,
}

impl AppState {
    /// Creates state from configuration, building a [`GeminiGateway`] when an
    /// API key is present.
    pub fn from_config(config: &ServerConfig) -> Self {
        let gateway = GeminiGateway::from_config(config)
            .map(|gateway| Arc::new(gateway) as Arc<dyn ModelGateway>);
        Self::with_gateway(gateway)
    }

    /// Creates state around an explicit gateway (or none, for the
    /// unavailable mode).
    pub fn with_gateway(gateway: Option<Arc<dyn ModelGateway>>) -> Self {
        AppState {
            service: Arc::new(SimulatorService::new(gateway)),
        }
    }
}
