//! Domain model and prompt contract for the TeachWise teaching simulator.
//!
//! Holds the typed lesson/persona/scenario records, the per-language prompt
//! builders, and the normalizer that turns raw model replies back into those
//! records. Nothing here performs I/O.

pub mod error;
pub mod language;
pub mod normalize;
pub mod persona;
pub mod prompt;
pub mod scenario;

// Re-export commonly used types
pub use error::CoreError;
pub use language::Language;
pub use normalize::{parse_model_json, strip_code_fence};
pub use persona::{CommunicationStyle, StudentPersona, TraitBand, TraitScore};
pub use prompt::SessionReview;
pub use scenario::{
    ChatMessage, EvaluationResult, GeneratedQuestion, LessonContext, Scenario, Sender,
    StudentProfile,
};
