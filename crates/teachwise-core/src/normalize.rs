//! Cleanup of raw model replies before JSON parsing.
//!
//! Models frequently wrap JSON payloads in markdown code fences even when told
//! not to. [`strip_code_fence`] removes one fence from each outer boundary and
//! nothing else; [`parse_model_json`] then hands the result to serde_json.

use serde::de::DeserializeOwned;

use crate::error::CoreError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Removes a leading `` ```json `` (or bare `` ``` ``) fence and a trailing
/// `` ``` `` fence, trimming whitespace around the result.
///
/// Text without fences is returned trimmed but otherwise unchanged. The
/// output is not checked for being JSON.
pub fn strip_code_fence(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix(JSON_FENCE) {
        text = rest;
    } else if let Some(rest) = text.strip_prefix(FENCE) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }
    text.trim()
}

/// Strips code fences from `raw` and deserializes the remainder.
pub fn parse_model_json<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|err| CoreError::MalformedOutput {
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_tagged_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_generic_fence() {
        assert_eq!(strip_code_fence("  ```\n[1, 2]\n```  \n"), "[1, 2]");
    }

    #[test]
    fn clean_json_is_returned_trimmed() {
        let clean = "{\"question\": \"Why?\"}";
        assert_eq!(strip_code_fence(clean), clean);
        assert_eq!(strip_code_fence("\n\t{\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn stripping_is_idempotent_on_clean_text() {
        let once = strip_code_fence("```json\n{\"a\":1}\n```");
        assert_eq!(strip_code_fence(once), once);
    }

    #[test]
    fn inner_fences_are_left_alone() {
        let text = "{\"code\": \"```rust\\nfn main() {}\\n```x\"}";
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn parse_model_json_reports_malformed_output() {
        #[derive(Debug, serde::Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            a: i32,
        }

        assert!(parse_model_json::<Payload>("```json\n{\"a\": 1}\n```").is_ok());
        let err = parse_model_json::<Payload>("Sure! Here is your JSON").unwrap_err();
        assert!(matches!(err, CoreError::MalformedOutput { .. }));
    }
}
