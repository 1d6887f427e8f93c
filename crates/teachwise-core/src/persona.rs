//! Simulated student persona.
//!
//! A [`StudentPersona`] carries five traits that shape how the simulated
//! student talks. Numeric traits are [`TraitScore`]s bounded to 1..=10;
//! out-of-range values are rejected during deserialization so malformed
//! personas never reach prompt construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest accepted trait score.
pub const MIN_SCORE: u8 = 1;
/// Highest accepted trait score.
pub const MAX_SCORE: u8 = 10;
/// Score used when a trait is not supplied.
pub const DEFAULT_SCORE: u8 = 5;

/// A persona trait score in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TraitScore(u8);

impl TraitScore {
    /// Creates a score, returning `None` when `value` is outside `1..=10`.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_SCORE..=MAX_SCORE).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Classifies the score: `<= 3` is low, `>= 8` is high, anything else
    /// is moderate.
    pub fn band(self) -> TraitBand {
        match self.0 {
            0..=3 => TraitBand::Low,
            8..=u8::MAX => TraitBand::High,
            _ => TraitBand::Moderate,
        }
    }
}

impl Default for TraitScore {
    fn default() -> Self {
        Self(DEFAULT_SCORE)
    }
}

impl TryFrom<i64> for TraitScore {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(TraitScore::new)
            .ok_or_else(|| {
                format!(
                    "trait score {} is out of range (expected {}-{})",
                    value, MIN_SCORE, MAX_SCORE
                )
            })
    }
}

impl From<TraitScore> for u8 {
    fn from(score: TraitScore) -> Self {
        score.0
    }
}

impl fmt::Display for TraitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Behavioral band a trait score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitBand {
    Low,
    Moderate,
    High,
}

/// How the simulated student prefers to receive and express ideas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    #[default]
    Verbal,
    Visual,
    HandsOn,
}

impl CommunicationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CommunicationStyle::Verbal => "verbal",
            CommunicationStyle::Visual => "visual",
            CommunicationStyle::HandsOn => "hands_on",
        }
    }
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five traits parameterizing a simulated student's behavior.
///
/// Every field defaults independently, so `{}` and `{"persistence": 9}` are
/// both valid wire forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentPersona {
    /// Prior knowledge strength.
    pub conceptual_readiness: TraitScore,
    /// Ability to recognize one's own understanding or confusion.
    pub metacognitive_awareness: TraitScore,
    /// Willingness to work through difficulty.
    pub persistence: TraitScore,
    pub communication_style: CommunicationStyle,
    /// Willingness to share thinking and ask questions.
    pub confidence_level: TraitScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_score_rejects_out_of_range_values() {
        assert!(TraitScore::new(0).is_none());
        assert!(TraitScore::new(11).is_none());
        assert_eq!(TraitScore::new(10).map(TraitScore::get), Some(10));
        assert!(TraitScore::try_from(-3).is_err());
        assert!(TraitScore::try_from(300).is_err());
    }

    #[test]
    fn band_thresholds_split_at_three_and_eight() {
        let band = |v| TraitScore::new(v).unwrap().band();
        assert_eq!(band(1), TraitBand::Low);
        assert_eq!(band(3), TraitBand::Low);
        assert_eq!(band(4), TraitBand::Moderate);
        assert_eq!(band(7), TraitBand::Moderate);
        assert_eq!(band(8), TraitBand::High);
        assert_eq!(band(10), TraitBand::High);
    }

    #[test]
    fn persona_deserializes_partial_object_with_defaults() {
        let persona: StudentPersona =
            serde_json::from_str(r#"{"persistence": 9, "communication_style": "hands_on"}"#)
                .unwrap();
        assert_eq!(persona.persistence.get(), 9);
        assert_eq!(persona.confidence_level.get(), DEFAULT_SCORE);
        assert_eq!(persona.communication_style, CommunicationStyle::HandsOn);
    }

    #[test]
    fn persona_rejects_unknown_style_and_out_of_range_score() {
        assert!(serde_json::from_str::<StudentPersona>(r#"{"communication_style": "musical"}"#)
            .is_err());
        assert!(serde_json::from_str::<StudentPersona>(r#"{"confidence_level": 11}"#).is_err());
    }

    #[test]
    fn persona_serializes_scores_as_plain_integers() {
        let value = serde_json::to_value(StudentPersona::default()).unwrap();
        assert_eq!(value["confidence_level"], 5);
        assert_eq!(value["communication_style"], "verbal");
    }
}
