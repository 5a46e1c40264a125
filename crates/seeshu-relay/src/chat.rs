//! Single-turn relay to an OpenAI-style `/v1/chat/completions` endpoint.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RelayError;

/// System prompt sent with every relayed message.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for pneumonia care in newborns.";

/// Completion-token cap per reply.
const MAX_TOKENS: u32 = 200;

/// Upstream endpoint settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    /// Scheme + host, e.g. `https://api.openai.com`. The completions path
    /// is appended here.
    pub base_url: String,
    pub model: String,
}

/// The relay itself: one HTTP client, one config, no session state.
pub struct ChatRelay {
    http: reqwest::Client,
    config: RelayConfig,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Forward one user message and return the assistant's text reply.
    ///
    /// `context_block` is prepended to the system prompt when the caller
    /// supplies recent-assessment context (see [`crate::context`]); with no
    /// context the system prompt goes out unchanged.
    pub async fn relay(
        &self,
        message: &str,
        context_block: Option<&str>,
    ) -> Result<String, RelayError> {
        if self.config.api_key.is_empty() {
            return Err(RelayError::Config("no API key configured".to_string()));
        }

        let system = match context_block {
            Some(block) if !block.is_empty() => format!("{block}\n\n{SYSTEM_PROMPT}"),
            _ => SYSTEM_PROMPT.to_string(),
        };

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: system,
                },
                WireMessage {
                    role: "user",
                    content: message.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/'),
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream(format!(
                "upstream returned {status}: {body}",
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RelayError::ResponseParse(e.to_string()))?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| RelayError::ResponseParse("no reply in response".to_string()))?;

        info!(model = %self.config.model, reply_len = reply.len(), "relayed chat message");

        Ok(reply)
    }
}
