//! AWS Bedrock backend using the Converse API.
//!
//! The Converse API needs at least one message in every request, so case
//! generation sends the case prompt as a system block followed by a short
//! user turn. Questions are sent as a lone user turn, matching the
//! OpenAI backend.
//!
//! The SDK is async; [`BedrockModel`] owns a Tokio runtime and blocks on
//! each call so that it fits the synchronous [`CaseModel`] seam.

use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tokio::runtime::Runtime;
use tracing::info;

use crate::client::{CaseModel, non_empty};
use crate::error::ModelError;

/// User turn that accompanies the case system prompt.
const CASE_REQUEST_TURN: &str = "Generate a new clinical case.";

pub struct BedrockModel {
    runtime: Runtime,
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockModel {
    /// `model_id` must be an inference profile ID, e.g.
    /// `us.anthropic.claude-sonnet-4-20250514-v1:0`.
    pub fn new(runtime: Runtime, config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            runtime,
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }

    async fn converse(&self, system_prompt: Option<&str>, user_text: &str) -> Result<String, ModelError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_text.to_string()))
            .build()
            .map_err(|e| ModelError::Invocation(e.to_string()))?;

        let mut request = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message);
        if let Some(system_prompt) = system_prompt {
            request = request.system(SystemContentBlock::Text(system_prompt.to_string()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| ModelError::ResponseParse("no message in response".to_string()))?;

        let response_text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        info!(
            model_id = %self.model_id,
            completion_len = response_text.len(),
            "converse completion received"
        );

        non_empty(response_text)
    }
}

impl CaseModel for BedrockModel {
    fn generate(&self, system_prompt: &str) -> Result<String, ModelError> {
        self.runtime
            .block_on(self.converse(Some(system_prompt), CASE_REQUEST_TURN))
    }

    fn complete(&self, user_prompt: &str) -> Result<String, ModelError> {
        self.runtime.block_on(self.converse(None, user_prompt))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
