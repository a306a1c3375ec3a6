//! Groq client implementation

use crate::llm::core::{config::ProviderConfig, error::LlmError, types::ChatMessage};
use crate::llm::http::ChatCompletionClient;

/// Client for Groq chat completions
#[derive(Debug, Clone)]
pub struct GroqClient {
    inner: ChatCompletionClient,
}

impl GroqClient {
    pub fn new(config: ProviderConfig) -> Result<Self, LlmError> {
        Ok(Self {
            inner: ChatCompletionClient::new(config)?,
        })
    }

    /// Send `messages` unchanged and return the first choice's text
    ///
    /// Missing content is logged and yields an empty string.
    pub async fn chat_complete(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let response = self.inner.create_chat_completion(messages, None).await?;

        match response.first_content() {
            Some(content) => Ok(content.to_string()),
            None => {
                tracing::warn!(model = self.inner.model(), "Missing Groq response content");
                Ok(String::new())
            }
        }
    }
}
