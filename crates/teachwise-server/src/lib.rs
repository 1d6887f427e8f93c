//! HTTP/JSON API server for the TeachWise teaching simulator.
//!
//! Turns lesson parameters into model prompts and model replies into
//! practice questions, roleplay scenarios, simulated student turns and
//! session evaluations. This crate contains the server framework, the model
//! gateway, API schema types, error handling, and route definitions.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
