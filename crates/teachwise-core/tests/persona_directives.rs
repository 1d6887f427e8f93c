//! Property tests: persona thresholds drive the student-turn directives.
//!
//! Each numeric trait is checked independently across its whole range, in
//! both languages, against the rendered prompt rather than the selector alone.

use proptest::prelude::*;

use teachwise_core::prompt::directives::{
    confidence_directive, metacognition_directive, persistence_directive,
};
use teachwise_core::prompt::student_turn_prompt;
use teachwise_core::{
    CommunicationStyle, Language, Scenario, StudentPersona, TraitBand, TraitScore,
};

fn score() -> impl Strategy<Value = TraitScore> {
    (1u8..=10).prop_map(|v| TraitScore::new(v).unwrap())
}

fn style() -> impl Strategy<Value = CommunicationStyle> {
    prop_oneof![
        Just(CommunicationStyle::Verbal),
        Just(CommunicationStyle::Visual),
        Just(CommunicationStyle::HandsOn),
    ]
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::English), Just(Language::TraditionalChinese)]
}

fn persona() -> impl Strategy<Value = StudentPersona> {
    (score(), score(), score(), style(), score()).prop_map(
        |(conceptual_readiness, metacognitive_awareness, persistence, communication_style, confidence_level)| {
            StudentPersona {
                conceptual_readiness,
                metacognitive_awareness,
                persistence,
                communication_style,
                confidence_level,
            }
        },
    )
}

proptest! {
    #[test]
    fn confidence_directive_follows_band(persona in persona()) {
        let scenario = Scenario { persona, ..Scenario::default() };
        let prompt = student_turn_prompt(&scenario, "Why?", &[], Language::English);
        let c = persona.confidence_level.get();

        let hesitant = "Be hesitant, use 'maybe', 'I think', ask for validation";
        let assertive = "Be assertive and state opinions clearly";
        let neutral = "Show moderate confidence";

        prop_assert_eq!(prompt.contains(hesitant), c <= 3);
        prop_assert_eq!(prompt.contains(assertive), c >= 8);
        prop_assert_eq!(prompt.contains(neutral), (4..=7).contains(&c));
    }

    #[test]
    fn persistence_and_metacognition_follow_band(persona in persona()) {
        let scenario = Scenario { persona, ..Scenario::default() };
        let prompt = student_turn_prompt(&scenario, "Why?", &[], Language::English);
        let p = persona.persistence.get();
        let m = persona.metacognitive_awareness.get();

        prop_assert_eq!(prompt.contains("Give up quickly"), p <= 3);
        prop_assert_eq!(prompt.contains("Keep trying, ask follow-up questions"), p >= 8);
        prop_assert_eq!(prompt.contains("Show average persistence"), (4..=7).contains(&p));

        prop_assert_eq!(prompt.contains("Don't recognize mistakes or confusion"), m <= 3);
        prop_assert_eq!(prompt.contains("Explicitly state confusion"), m >= 8);
        prop_assert_eq!(prompt.contains("Show some self-awareness"), (4..=7).contains(&m));
    }

    #[test]
    fn selected_directive_appears_in_prompt_for_any_language(
        persona in persona(),
        language in language(),
    ) {
        let scenario = Scenario { persona, ..Scenario::default() };
        let prompt = student_turn_prompt(&scenario, "Why?", &[], language);

        prop_assert!(prompt.contains(confidence_directive(persona.confidence_level, language)));
        prop_assert!(prompt.contains(persistence_directive(persona.persistence, language)));
        prop_assert!(prompt.contains(metacognition_directive(persona.metacognitive_awareness, language)));
    }

    #[test]
    fn selectors_agree_with_band(value in 1u8..=10, language in language()) {
        let score = TraitScore::new(value).unwrap();
        let low = confidence_directive(TraitScore::new(1).unwrap(), language);
        let high = confidence_directive(TraitScore::new(10).unwrap(), language);
        let picked = confidence_directive(score, language);

        match score.band() {
            TraitBand::Low => prop_assert_eq!(picked, low),
            TraitBand::High => prop_assert_eq!(picked, high),
            TraitBand::Moderate => {
                prop_assert_ne!(picked, low);
                prop_assert_ne!(picked, high);
            }
        }
    }
}
