//! Simulator service: the four model-backed operations.
//!
//! Each operation builds its prompt from validated input, requires the model
//! gateway, calls it once, and turns the raw reply into a typed record. The
//! error taxonomy is applied here:
//!
//! - input problems → [`ApiError::BadRequest`], before any model call
//! - no gateway configured → [`ApiError::ServiceUnavailable`]
//! - provider failure or unparseable reply → [`ApiError::InternalError`]
//!   with message `"<operation> failed: <cause>"`

use std::fmt;
use std::sync::Arc;

use teachwise_core::prompt::{
    evaluation_prompt, question_prompt, scenario_prompt, student_turn_prompt,
};
use teachwise_core::{
    parse_model_json, CoreError, EvaluationResult, GeneratedQuestion, Scenario, SessionReview,
};

use crate::error::ApiError;
use crate::gateway::ModelGateway;
use crate::schema::generation::{GenerateQuestionRequest, GenerateScenarioRequest};
use crate::schema::session::{EvaluateSessionRequest, StudentResponse, StudentResponseRequest};

/// The operation a failure belongs to, used to prefix error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    QuestionGeneration,
    ScenarioGeneration,
    StudentResponse,
    SessionEvaluation,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::QuestionGeneration => "question generation",
            Operation::ScenarioGeneration => "scenario generation",
            Operation::StudentResponse => "student response",
            Operation::SessionEvaluation => "session evaluation",
        }
    }

    fn failed(self, cause: impl fmt::Display) -> ApiError {
        ApiError::InternalError(format!("{} failed: {}", self.label(), cause))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prompt construction and model access for all generation endpoints.
pub struct SimulatorService {
    gateway: Option<Arc<dyn ModelGateway>>,
}

impl SimulatorService {
    /// `None` leaves the service in the unavailable state: every operation
    /// fails with 503 without attempting a model call.
    pub fn new(gateway: Option<Arc<dyn ModelGateway>>) -> Self {
        Self { gateway }
    }

    pub fn is_available(&self) -> bool {
        self.gateway.is_some()
    }

    /// `POST /api/generate-question`
    pub async fn generate_question(
        &self,
        req: GenerateQuestionRequest,
    ) -> Result<GeneratedQuestion, ApiError> {
        let op = Operation::QuestionGeneration;
        let prompt = question_prompt(&req.lesson, req.language);
        let raw = self.call(op, &prompt).await?;
        parse_model_json(&raw).map_err(|err| op.failed(err))
    }

    /// `POST /api/generate-scenario`
    pub async fn generate_scenario(
        &self,
        req: GenerateScenarioRequest,
    ) -> Result<Scenario, ApiError> {
        let op = Operation::ScenarioGeneration;
        let prompt = scenario_prompt(
            &req.lesson,
            req.question.as_deref(),
            &req.student_persona,
            req.language,
        )
        .map_err(input_error)?;

        let raw = self.call(op, &prompt).await?;
        // The request is authoritative for what the model was asked to echo.
        let mut scenario = Scenario::from_model_reply(&raw, req.student_persona)
            .map_err(|err| op.failed(err))?;
        scenario.validate().map_err(|err| op.failed(err))?;
        if let Some(question) = req.question {
            scenario.practice_question = question.trim().to_string();
        }

        tracing::info!(
            topic = %scenario.topic,
            options = scenario.misconception_options.len(),
            "scenario generated"
        );
        Ok(scenario)
    }

    /// `POST /api/student-response`
    pub async fn generate_student_response(
        &self,
        req: StudentResponseRequest,
    ) -> Result<StudentResponse, ApiError> {
        let op = Operation::StudentResponse;
        let prompt = student_turn_prompt(
            &req.scenario,
            &req.teacher_message,
            &req.chat_history,
            req.language,
        );
        let raw = self.call(op, &prompt).await?;
        Ok(StudentResponse {
            response: raw.trim().to_string(),
        })
    }

    /// `POST /api/evaluate-session`
    pub async fn evaluate_session(
        &self,
        req: EvaluateSessionRequest,
    ) -> Result<EvaluationResult, ApiError> {
        let op = Operation::SessionEvaluation;
        let review = SessionReview {
            selected_misconception: req.selected_misconception,
            intervention: &req.intervention,
            selected_strategy: req.selected_strategy.as_deref(),
        };
        let prompt = evaluation_prompt(&req.scenario, &review, &req.chat_history, req.language)
            .map_err(input_error)?;

        let raw = self.call(op, &prompt).await?;
        let evaluation: EvaluationResult =
            parse_model_json(&raw).map_err(|err| op.failed(err))?;

        let correct = req.scenario.is_correct_diagnosis(req.selected_misconception);
        if evaluation.correct_diagnosis != correct {
            tracing::warn!(
                model = evaluation.correct_diagnosis,
                computed = correct,
                "model disagreed on diagnosis correctness; using computed value"
            );
        }

        Ok(EvaluationResult {
            correct_diagnosis: correct,
            ..evaluation
        }
        .clamp_scores())
    }

    async fn call(&self, op: Operation, prompt: &str) -> Result<String, ApiError> {
        let gateway = self.gateway.as_ref().ok_or_else(|| {
            tracing::warn!(operation = %op, "model gateway not configured");
            ApiError::unavailable()
        })?;

        tracing::info!(operation = %op, prompt_len = prompt.len(), "calling model");
        match gateway.generate(prompt).await {
            Ok(raw) => {
                tracing::info!(operation = %op, reply_len = raw.len(), "model response received");
                Ok(raw)
            }
            Err(err) => {
                tracing::error!(operation = %op, error = %err, "model call failed");
                Err(op.failed(err))
            }
        }
    }
}

fn input_error(err: CoreError) -> ApiError {
    ApiError::BadRequest(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_carry_operation_label() {
        let err = Operation::SessionEvaluation.failed("boom");
        assert_eq!(err.to_string(), "internal error: session evaluation failed: boom");
    }

    #[tokio::test]
    async fn unavailable_service_rejects_without_gateway() {
        let service = SimulatorService::new(None);
        assert!(!service.is_available());
        let err = service
            .call(Operation::QuestionGeneration, "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
    }
}
