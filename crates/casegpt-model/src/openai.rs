//! OpenAI-compatible chat completions backend.
//!
//! Each call is a single `POST {base_url}/chat/completions` carrying one
//! message: a `system` message for case generation, a `user` message for
//! questions. Only `choices[0].message.content` of the reply is used.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::{CaseModel, non_empty};
use crate::error::ModelError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection settings for an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl OpenAiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Build the request body for a single-message conversation.
pub fn build_request<'a>(model: &'a str, role: &'a str, content: &'a str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![RequestMessage { role, content }],
    }
}

/// Extract the first choice's text from a chat completions response body.
pub fn parse_completion(body: &str) -> Result<String, ModelError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ModelError::ResponseParse(e.to_string()))?;

    let text = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::ResponseParse("no choices in response".to_string()))?
        .message
        .content
        .unwrap_or_default();

    non_empty(text)
}

// ── Client ───────────────────────────────────────────────────────────────────

pub struct OpenAiModel {
    agent: ureq::Agent,
    settings: OpenAiSettings,
}

impl OpenAiModel {
    pub fn new(settings: OpenAiSettings) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .http_status_as_error(false)
            .build();

        Self {
            agent: config.into(),
            settings,
        }
    }

    fn chat(&self, role: &str, content: &str) -> Result<String, ModelError> {
        let url = format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        );
        let request = build_request(&self.settings.model, role, content);

        debug!(url = %url, model = %self.settings.model, role, prompt_len = content.len(), "sending chat completion");

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.settings.api_key))
            .send_json(&request)
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = parse_completion(&body)?;

        info!(model = %self.settings.model, role, completion_len = text.len(), "chat completion received");

        Ok(text)
    }
}

impl CaseModel for OpenAiModel {
    fn generate(&self, system_prompt: &str) -> Result<String, ModelError> {
        self.chat("system", system_prompt)
    }

    fn complete(&self, user_prompt: &str) -> Result<String, ModelError> {
        self.chat("user", user_prompt)
    }

    fn model_id(&self) -> &str {
        &self.settings.model
    }
}
