//! Request/response types for the roleplay chat and session evaluation.

use serde::{Deserialize, Serialize};
use teachwise_core::{ChatMessage, Language, Scenario};

/// `POST /api/student-response` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponseRequest {
    pub scenario: Scenario,
    pub teacher_message: String,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub language: Language,
}

/// The simulated student's reply.
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub response: String,
}

/// `POST /api/evaluate-session` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateSessionRequest {
    pub scenario: Scenario,
    /// Index into `scenario.misconceptionOptions`.
    pub selected_misconception: usize,
    pub intervention: String,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub selected_strategy: Option<String>,
    #[serde(default)]
    pub language: Language,
}
