//! Model gateway: the single outbound call to the text-generation provider.
//!
//! [`ModelGateway`] is the seam the simulator service depends on. The
//! production [`GeminiGateway`] calls the Gemini `generateContent` REST
//! endpoint; tests inject their own implementations.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::ServerConfig;

/// Failures talking to the model provider. Propagated as-is; never retried.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider response parse failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider response contained no text ({reason})")]
    EmptyReply { reason: String },
}

/// One prompt in, one raw text reply out.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// Gemini REST client.
pub struct GeminiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn new(base_url: &str, model: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            api_key: api_key.into(),
        }
    }

    /// Builds a gateway when the configuration carries an API key.
    pub fn from_config(config: &ServerConfig) -> Option<Self> {
        config
            .api_key
            .as_deref()
            .map(|key| Self::new(&config.gemini_base_url, &config.model, key))
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body_text)?;
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
    let block_reason = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GatewayError::EmptyReply {
            reason: block_reason
                .map(|reason| format!("prompt blocked: {}", reason))
                .unwrap_or_else(|| "no candidates".to_string()),
        });
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        return Err(GatewayError::EmptyReply {
            reason: candidate
                .finish_reason
                .map(|reason| format!("finish reason: {}", reason))
                .unwrap_or_else(|| "empty content".to_string()),
        });
    }

    Ok(text)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<String, GatewayError> {
        extract_text(serde_json::from_str(raw).unwrap())
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let gateway = GeminiGateway::new("https://example.test/v1beta/", "gemini-1.5-pro", "k");
        assert_eq!(
            gateway.endpoint,
            "https://example.test/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn from_config_requires_api_key() {
        let mut config = ServerConfig::from_lookup(|_| None).unwrap();
        assert!(GeminiGateway::from_config(&config).is_none());
        config.api_key = Some("key".to_string());
        assert!(GeminiGateway::from_config(&config).is_some());
    }

    #[test]
    fn extract_text_concatenates_parts_of_first_candidate() {
        let text = parse(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Hello, "}, {"text": "teacher."}]}, "finishReason": "STOP"},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(text, "Hello, teacher.");
    }

    #[test]
    fn extract_text_reports_blocked_prompt() {
        let err = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "provider response contained no text (prompt blocked: SAFETY)"
        );
    }

    #[test]
    fn extract_text_reports_empty_candidate() {
        let err = parse(r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::EmptyReply { .. }));
        assert!(err.to_string().contains("MAX_TOKENS"));
    }
}
