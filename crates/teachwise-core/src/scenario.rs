//! Lesson, scenario, chat and evaluation records.
//!
//! These are the typed shapes exchanged with the front-end and parsed out of
//! model replies. Wire keys are camelCase except for the embedded persona,
//! which keeps its snake_case trait names.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::normalize::parse_model_json;
use crate::persona::StudentPersona;

/// Lesson parameters shared by question and scenario generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContext {
    pub grade_level: String,
    pub subject: String,
    pub learning_outcomes: String,
    pub concepts: String,
}

/// A practice question proposed by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub rationale: String,
    #[serde(default)]
    pub expected_misconceptions: Vec<String>,
}

/// The simulated student inside a [`Scenario`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub background: String,
    /// `struggling`, `average` or `advanced`, as chosen by the model.
    pub performance_level: String,
    pub actual_misconception: String,
    pub initial_response: String,
}

/// A roleplay session generated once and echoed back by the client on every
/// later call.
///
/// Absent fields deserialize to defaults so that a partially echoed scenario
/// still renders a usable prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    pub student: StudentProfile,
    /// One correct diagnosis plus plausible distractors.
    pub misconception_options: Vec<String>,
    pub correct_misconception_index: usize,
    pub topic: String,
    pub difficulty: String,
    pub persona: StudentPersona,
    pub practice_question: String,
}

impl Scenario {
    /// Checks that `correct_misconception_index` addresses an option.
    pub fn validate(&self) -> Result<(), CoreError> {
        let len = self.misconception_options.len();
        if self.correct_misconception_index >= len {
            return Err(CoreError::InconsistentScenario {
                reason: format!(
                    "correctMisconceptionIndex {} is outside {} misconception option(s)",
                    self.correct_misconception_index, len
                ),
            });
        }
        Ok(())
    }

    /// Returns the option text at `index`.
    pub fn option(&self, index: usize) -> Result<&str, CoreError> {
        self.misconception_options
            .get(index)
            .map(String::as_str)
            .ok_or(CoreError::SelectionOutOfRange {
                index,
                len: self.misconception_options.len(),
            })
    }

    pub fn is_correct_diagnosis(&self, selected: usize) -> bool {
        selected == self.correct_misconception_index
    }

    /// Parses a generated scenario, replacing whatever persona the model
    /// echoed with `persona`.
    ///
    /// The echo is removed before typed parsing, so a persona the model
    /// garbled (out-of-range scores, misspelled styles) cannot fail the reply.
    pub fn from_model_reply(raw: &str, persona: StudentPersona) -> Result<Self, CoreError> {
        let mut value: serde_json::Value = parse_model_json(raw)?;
        if let Some(fields) = value.as_object_mut() {
            fields.remove("persona");
        }
        let scenario: Scenario =
            serde_json::from_value(value).map_err(|err| CoreError::MalformedOutput {
                reason: err.to_string(),
            })?;
        Ok(Scenario { persona, ..scenario })
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Teacher,
    Student,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Teacher => f.write_str("teacher"),
            Sender::Student => f.write_str("student"),
        }
    }
}

/// One message in the teacher/student transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
}

impl ChatMessage {
    pub fn teacher(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::Teacher,
            message: message.into(),
        }
    }

    pub fn student(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::Student,
            message: message.into(),
        }
    }
}

/// Rubric-scored assessment of a teacher's diagnostic session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub correct_diagnosis: bool,
    /// Overall score, 0-100.
    #[serde(deserialize_with = "rubric_score")]
    pub score: u32,
    /// Quality of questioning, 1-10.
    #[serde(deserialize_with = "rubric_score")]
    pub questioning_score: u32,
    pub correct_misconception: String,
    pub feedback: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl EvaluationResult {
    /// Forces both scores into their rubric ranges.
    pub fn clamp_scores(mut self) -> Self {
        self.score = self.score.min(100);
        self.questioning_score = self.questioning_score.clamp(1, 10);
        self
    }
}

/// Accepts any finite JSON number. Fractions round to the nearest integer and
/// negatives saturate at zero; [`EvaluationResult::clamp_scores`] applies the
/// rubric bounds afterwards.
fn rubric_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(de::Error::custom("score must be a finite number"));
    }
    Ok(value.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}
