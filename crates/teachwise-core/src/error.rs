//! Core error types for teachwise-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! ways prompt construction and model-output parsing can fail.

use thiserror::Error;

/// Core errors produced by the teachwise-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field required to render a prompt was absent or blank.
    #[error("{field} is required for {purpose}")]
    MissingField {
        field: &'static str,
        purpose: &'static str,
    },

    /// A selected option index does not address any misconception option.
    #[error("selected misconception {index} is out of range ({len} option(s) available)")]
    SelectionOutOfRange { index: usize, len: usize },

    /// The model reply could not be parsed into the expected structure.
    #[error("model returned malformed JSON: {reason}")]
    MalformedOutput { reason: String },

    /// A scenario violates its own internal invariants.
    #[error("inconsistent scenario: {reason}")]
    InconsistentScenario { reason: String },
}
