//! Request types for question and scenario generation.
//!
//! Responses are the core records themselves ([`GeneratedQuestion`] and
//! [`Scenario`]), serialized without an envelope.
//!
//! [`GeneratedQuestion`]: teachwise_core::GeneratedQuestion
//! [`Scenario`]: teachwise_core::Scenario

use serde::Deserialize;
use teachwise_core::{Language, LessonContext, StudentPersona};

/// `POST /api/generate-question` body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuestionRequest {
    #[serde(flatten)]
    pub lesson: LessonContext,
    #[serde(default)]
    pub language: Language,
}

/// `POST /api/generate-scenario` body.
///
/// `question` is optional on the wire so that its absence surfaces as the
/// service's own input error rather than a generic body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScenarioRequest {
    #[serde(flatten)]
    pub lesson: LessonContext,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub student_persona: StudentPersona,
    #[serde(default)]
    pub language: Language,
}
