//! Server configuration read from environment variables.
//!
//! - `GOOGLE_API_KEY` / `GEMINI_API_KEY`: model provider key (first non-blank wins)
//! - `TEACHWISE_HOST`: listen address (default: "0.0.0.0")
//! - `TEACHWISE_PORT` / `PORT`: listen port (default: 8000)
//! - `TEACHWISE_MODEL`: Gemini model name (default: "gemini-1.5-pro")
//! - `TEACHWISE_GEMINI_BASE_URL`: API root (default: the public v1beta endpoint)

use std::fmt;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];
const PORT_VARS: [&str; 2] = ["TEACHWISE_PORT", "PORT"];

/// Configuration errors detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port '{value}' in {var}")]
    InvalidPort { var: &'static str, value: String },
}

/// Settings for the HTTP server and the model gateway.
#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub model: String,
    pub gemini_base_url: String,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = API_KEY_VARS.iter().find_map(|name| get(*name));

        let port = match PORT_VARS.iter().find_map(|name| get(*name).map(|v| (*name, v))) {
            Some((var, value)) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var, value })?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig {
            host: get("TEACHWISE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_key,
            model: get("TEACHWISE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: get("TEACHWISE_GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Keeps the key out of logs.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[test]
    fn api_key_accepts_either_name_and_ignores_blanks() {
        let cfg = config(&[("GEMINI_API_KEY", "gem")]).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("gem"));

        let cfg = config(&[("GOOGLE_API_KEY", "goo"), ("GEMINI_API_KEY", "gem")]).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("goo"));

        let cfg = config(&[("GOOGLE_API_KEY", "   "), ("GEMINI_API_KEY", "gem")]).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("gem"));

        let cfg = config(&[("GOOGLE_API_KEY", "")]).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn port_prefers_teachwise_port_and_rejects_garbage() {
        let cfg = config(&[("TEACHWISE_PORT", "9001"), ("PORT", "7000")]).unwrap();
        assert_eq!(cfg.port, 9001);

        let cfg = config(&[("PORT", "7000")]).unwrap();
        assert_eq!(cfg.port, 7000);

        match config(&[("TEACHWISE_PORT", "eighty")]) {
            Err(ConfigError::InvalidPort { var, value }) => {
                assert_eq!(var, "TEACHWISE_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected InvalidPort, got {:?}", other.map(|c| c.port)),
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = config(&[("GOOGLE_API_KEY", "super-secret")]).unwrap();
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
