//! Prompt construction for the four model operations.
//!
//! Every builder is a pure function of its typed inputs and a [`Language`].
//! The language picks a template catalog; Traditional Chinese additionally
//! prepends a language directive block. Persona traits become behavioral
//! directives through the selectors in [`directives`].

mod catalog;
mod chinese;
pub mod directives;
mod english;
mod render;

use crate::error::CoreError;
use crate::language::Language;
use crate::persona::StudentPersona;
use crate::scenario::{ChatMessage, LessonContext, Scenario, Sender};

use self::catalog::{catalog, Catalog};
use self::directives::{
    confidence_directive, metacognition_directive, persistence_directive, style_directive,
};
use self::render::render;

/// Number of trailing chat messages given to the student-turn prompt.
pub const STUDENT_CONTEXT_WINDOW: usize = 6;

/// The teacher's answers submitted for evaluation.
#[derive(Debug, Clone, Copy)]
pub struct SessionReview<'a> {
    /// Index into the scenario's misconception options.
    pub selected_misconception: usize,
    pub intervention: &'a str,
    pub selected_strategy: Option<&'a str>,
}

/// Prompt asking the model for a practice question.
pub fn question_prompt(lesson: &LessonContext, language: Language) -> String {
    let catalog = catalog(language);
    let body = render(catalog.question, &lesson_vars(lesson));
    finish(catalog, body)
}

/// Prompt asking the model for a full roleplay scenario.
///
/// Fails with [`CoreError::MissingField`] when `question` is absent or blank.
pub fn scenario_prompt(
    lesson: &LessonContext,
    question: Option<&str>,
    persona: &StudentPersona,
    language: Language,
) -> Result<String, CoreError> {
    let question = question
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(CoreError::MissingField {
            field: "question",
            purpose: "scenario generation",
        })?;

    let catalog = catalog(language);
    let scores = persona_scores(persona);
    let persona_vars = score_vars(&scores, persona);
    let profile = render(catalog.persona_profile, &persona_vars);
    let question_json = quote_json(question);

    let mut vars = lesson_vars(lesson).to_vec();
    vars.extend_from_slice(&persona_vars);
    vars.push(("question", question));
    vars.push(("question_json", question_json.as_str()));
    vars.push(("persona_profile", profile.as_str()));

    Ok(finish(catalog, render(catalog.scenario, &vars)))
}

/// Prompt asking the model to answer as the scenario's student.
pub fn student_turn_prompt(
    scenario: &Scenario,
    teacher_message: &str,
    history: &[ChatMessage],
    language: Language,
) -> String {
    let catalog = catalog(language);
    let labels = &catalog.labels;
    let student = &scenario.student;
    let persona = &scenario.persona;

    let recent = &history[history.len().saturating_sub(STUDENT_CONTEXT_WINDOW)..];
    let conversation = transcript(catalog, recent);

    let scores = persona_scores(persona);
    let mut guidance_vars = score_vars(&scores, persona).to_vec();
    guidance_vars.extend_from_slice(&[
        (
            "confidence_directive",
            confidence_directive(persona.confidence_level, language),
        ),
        (
            "persistence_directive",
            persistence_directive(persona.persistence, language),
        ),
        (
            "metacognition_directive",
            metacognition_directive(persona.metacognitive_awareness, language),
        ),
        (
            "style_directive",
            style_directive(persona.communication_style, language),
        ),
    ]);
    let guidance = render(catalog.persona_guidance, &guidance_vars);

    let vars = [
        ("name", or_fallback(&student.name, labels.fallback_name)),
        (
            "performance_level",
            or_fallback(&student.performance_level, labels.fallback_performance),
        ),
        ("topic", or_fallback(&scenario.topic, labels.fallback_topic)),
        ("background", student.background.as_str()),
        ("misconception", student.actual_misconception.as_str()),
        ("practice_question", scenario.practice_question.as_str()),
        ("persona_guidance", guidance.as_str()),
        ("conversation", conversation.as_str()),
        ("teacher_message", teacher_message),
        (
            "difficulty",
            or_fallback(&scenario.difficulty, labels.fallback_difficulty),
        ),
    ];

    finish(catalog, render(catalog.student_turn, &vars))
}

/// Prompt asking the model to score a finished diagnostic session.
///
/// The correctness of the teacher's diagnosis is computed here and rendered
/// both as a label and as the literal `"correctDiagnosis": true|false` token
/// in the JSON skeleton.
pub fn evaluation_prompt(
    scenario: &Scenario,
    review: &SessionReview<'_>,
    history: &[ChatMessage],
    language: Language,
) -> Result<String, CoreError> {
    scenario.validate()?;
    let diagnosis = scenario.option(review.selected_misconception)?;
    let correct = scenario.is_correct_diagnosis(review.selected_misconception);

    let catalog = catalog(language);
    let labels = &catalog.labels;

    let strategy_line = match review.selected_strategy.map(str::trim) {
        Some(strategy) if !strategy.is_empty() => {
            render(labels.strategy, &[("strategy", strategy)])
        }
        _ => labels.no_strategy.to_string(),
    };
    let question_count = history
        .iter()
        .filter(|m| m.sender == Sender::Teacher)
        .count()
        .to_string();
    let chat_history = transcript(catalog, history);

    let vars = [
        (
            "actual_misconception",
            scenario.student.actual_misconception.as_str(),
        ),
        ("teacher_diagnosis", diagnosis),
        ("correct_label", if correct { labels.yes } else { labels.no }),
        ("intervention", review.intervention),
        ("strategy_line", strategy_line.as_str()),
        ("teacher_question_count", question_count.as_str()),
        ("chat_history", chat_history.as_str()),
        ("correct_diagnosis", if correct { "true" } else { "false" }),
    ];

    Ok(finish(catalog, render(catalog.evaluation, &vars)))
}

fn finish(catalog: &Catalog, body: String) -> String {
    match catalog.preamble {
        Some(preamble) => format!("{}\n\n{}", preamble, body),
        None => body,
    }
}

fn lesson_vars(lesson: &LessonContext) -> [(&'static str, &str); 4] {
    [
        ("grade_level", lesson.grade_level.as_str()),
        ("subject", lesson.subject.as_str()),
        ("learning_outcomes", lesson.learning_outcomes.as_str()),
        ("concepts", lesson.concepts.as_str()),
    ]
}

/// Trait scores rendered as decimal strings, in declaration order.
fn persona_scores(persona: &StudentPersona) -> [String; 4] {
    [
        persona.conceptual_readiness.to_string(),
        persona.metacognitive_awareness.to_string(),
        persona.persistence.to_string(),
        persona.confidence_level.to_string(),
    ]
}

fn score_vars<'a>(
    scores: &'a [String; 4],
    persona: &StudentPersona,
) -> [(&'static str, &'a str); 5] {
    [
        ("conceptual_readiness", scores[0].as_str()),
        ("metacognitive_awareness", scores[1].as_str()),
        ("persistence", scores[2].as_str()),
        ("confidence_level", scores[3].as_str()),
        ("communication_style", persona.communication_style.as_str()),
    ]
}

fn transcript(catalog: &Catalog, messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return catalog.labels.empty_history.to_string();
    }
    messages
        .iter()
        .map(|m| {
            let label = match m.sender {
                Sender::Teacher => catalog.labels.teacher,
                Sender::Student => catalog.labels.student,
            };
            format!("{}: {}", label, m.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_fallback<'a>(value: &'a str, fallback: &'static str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn quote_json(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
