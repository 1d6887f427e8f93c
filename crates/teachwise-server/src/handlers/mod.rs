//! HTTP handler modules for the TeachWise API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate to
//! [`SimulatorService`](crate::service::SimulatorService), and return JSON
//! responses. No prompt or parsing logic lives in handlers.

pub mod frontend;
pub mod generation;
pub mod health;
pub mod session;
