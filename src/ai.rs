//! Chat-completion collaborator: configuration and wire types
//!
//! The hosting service proxies free-form questions to a third-party
//! chat-completion API. Configuration is injected once at construction:
//! [`AiConfig::from_env`] reads the environment exactly once, never per
//! call. The outbound HTTP transport lives behind [`ChatCompletion`]; the
//! host supplies an implementation with a request timeout and a single
//! retry-or-surface policy.

use crate::error::ReservingError;
use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324";

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the chat-completion collaborator.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Bearer token for the endpoint.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Create a config with the default endpoint, model, and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build a config from `OPENROUTER_API_KEY`, read once at construction.
    pub fn from_env() -> Result<Self, ReservingError> {
        let api_key = std::env::var("OPENROUTER_API_KEY").map_err(|_| {
            ReservingError::MissingConfig {
                name: "OPENROUTER_API_KEY",
            }
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

/// One message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Single-turn request for a user prompt, using the configured model.
    pub fn single_turn(config: &AiConfig, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// One completion choice in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Response body from the chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Content of the first choice, if the provider returned one.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Transport seam for the chat-completion call.
///
/// Implementations make one attempt, retry once on a transport failure, and
/// surface the error after that. No caching, no further retries.
pub trait ChatCompletion {
    /// Send a single-turn prompt and return the completion text.
    fn complete(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_over_defaults() {
        let config = AiConfig::new("key-123")
            .with_model("test/model")
            .with_api_url("https://example.test/v1/chat");

        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.model, "test/model");
        assert_eq!(config.api_url, "https://example.test/v1/chat");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_from_env_reads_once_at_construction() {
        std::env::set_var("OPENROUTER_API_KEY", "env-key");
        let config = AiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");

        // Later environment changes must not affect an existing config
        std::env::set_var("OPENROUTER_API_KEY", "changed");
        assert_eq!(config.api_key, "env-key");
        std::env::remove_var("OPENROUTER_API_KEY");
    }

    #[test]
    fn test_request_wire_shape() {
        let config = AiConfig::new("k").with_model("test/model");
        let request = ChatRequest::single_turn(&config, "explain IBNR");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "test/model");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "explain IBNR");
    }

    #[test]
    fn test_response_content_extraction() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.content(), Some("hello"));

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.content(), None);
    }
}
