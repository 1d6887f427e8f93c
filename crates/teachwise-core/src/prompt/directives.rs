//! Persona trait → behavioral directive selection.
//!
//! One selector per trait. Numeric traits pick a phrase by [`TraitBand`];
//! communication style maps directly from its enum variant.

use crate::language::Language;
use crate::persona::{CommunicationStyle, TraitBand, TraitScore};

use super::catalog::{catalog, BandPhrases};

fn by_band(phrases: &'static BandPhrases, score: TraitScore) -> &'static str {
    match score.band() {
        TraitBand::Low => phrases.low,
        TraitBand::Moderate => phrases.moderate,
        TraitBand::High => phrases.high,
    }
}

/// Low confidence hesitates and seeks validation; high confidence is assertive.
pub fn confidence_directive(score: TraitScore, language: Language) -> &'static str {
    by_band(&catalog(language).directives.confidence, score)
}

pub fn persistence_directive(score: TraitScore, language: Language) -> &'static str {
    by_band(&catalog(language).directives.persistence, score)
}

pub fn metacognition_directive(score: TraitScore, language: Language) -> &'static str {
    by_band(&catalog(language).directives.metacognition, score)
}

pub fn style_directive(style: CommunicationStyle, language: Language) -> &'static str {
    let phrases = &catalog(language).directives.style;
    match style {
        CommunicationStyle::Verbal => phrases.verbal,
        CommunicationStyle::Visual => phrases.visual,
        CommunicationStyle::HandsOn => phrases.hands_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> TraitScore {
        TraitScore::new(v).unwrap()
    }

    #[test]
    fn confidence_maps_each_band() {
        assert!(confidence_directive(score(2), Language::English).contains("hesitant"));
        assert!(confidence_directive(score(5), Language::English).contains("moderate"));
        assert!(confidence_directive(score(9), Language::English).contains("assertive"));
    }

    #[test]
    fn persistence_and_metacognition_are_independent() {
        assert!(persistence_directive(score(1), Language::English).contains("Give up quickly"));
        assert!(metacognition_directive(score(1), Language::English)
            .contains("Don't recognize"));
        assert!(persistence_directive(score(10), Language::English).contains("Keep trying"));
        assert!(metacognition_directive(score(10), Language::English)
            .contains("Explicitly state confusion"));
    }

    #[test]
    fn style_maps_by_variant() {
        assert!(style_directive(CommunicationStyle::Visual, Language::English)
            .contains("diagrams"));
        assert!(style_directive(CommunicationStyle::HandsOn, Language::English)
            .contains("physical examples"));
        assert!(style_directive(CommunicationStyle::Verbal, Language::English)
            .contains("definitions"));
    }

    #[test]
    fn chinese_catalog_has_distinct_phrases() {
        assert_ne!(
            confidence_directive(score(2), Language::TraditionalChinese),
            confidence_directive(score(2), Language::English)
        );
        assert!(confidence_directive(score(2), Language::TraditionalChinese).contains("猶豫"));
    }
}
