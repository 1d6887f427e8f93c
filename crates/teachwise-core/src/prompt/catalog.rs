//! Per-language template catalogs.
//!
//! Each [`Catalog`] holds the complete set of template text for one language.
//! The English and Traditional Chinese catalogs are parallel: they expose the
//! same placeholders, so the builder functions in the parent module never
//! branch on language beyond picking a catalog.

use crate::language::Language;

use super::{chinese, english};

/// Template text for one language. Placeholders use `{{name}}`.
pub(crate) struct Catalog {
    /// Directive block prepended to every prompt, if any.
    pub preamble: Option<&'static str>,
    pub question: &'static str,
    pub scenario: &'static str,
    pub persona_profile: &'static str,
    pub student_turn: &'static str,
    pub persona_guidance: &'static str,
    pub evaluation: &'static str,
    pub directives: DirectiveSet,
    pub labels: Labels,
}

/// Behavioral phrases per persona trait.
pub(crate) struct DirectiveSet {
    pub confidence: BandPhrases,
    pub persistence: BandPhrases,
    pub metacognition: BandPhrases,
    pub style: StylePhrases,
}

pub(crate) struct BandPhrases {
    pub low: &'static str,
    pub moderate: &'static str,
    pub high: &'static str,
}

pub(crate) struct StylePhrases {
    pub verbal: &'static str,
    pub visual: &'static str,
    pub hands_on: &'static str,
}

/// Short strings substituted into templates.
pub(crate) struct Labels {
    pub teacher: &'static str,
    pub student: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub strategy: &'static str,
    pub no_strategy: &'static str,
    pub empty_history: &'static str,
    pub fallback_name: &'static str,
    pub fallback_performance: &'static str,
    pub fallback_topic: &'static str,
    pub fallback_difficulty: &'static str,
}

pub(crate) fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::English => &english::CATALOG,
        Language::TraditionalChinese => &chinese::CATALOG,
    }
}
