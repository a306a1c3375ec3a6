//! OpenAI client implementation

use crate::llm::core::{
    config::ProviderConfig,
    error::LlmError,
    types::{ChatMessage, JsonAnswer, ResponseFormat},
};
use crate::llm::http::ChatCompletionClient;

/// Returned in place of the completion when OpenAI produced no content
pub const NO_RESPONSE: &str = "No response from OpenAI";

/// Client for OpenAI chat completions
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    inner: ChatCompletionClient,
}

impl OpenAiClient {
    pub fn new(config: ProviderConfig) -> Result<Self, LlmError> {
        Ok(Self {
            inner: ChatCompletionClient::new(config)?,
        })
    }

    /// Complete `user_message` under the given system instructions
    ///
    /// A response without content is not an error: it yields [`NO_RESPONSE`].
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        let messages = vec![
            ChatMessage::system(format!(
                "You follow the following instructions: {}",
                system_prompt
            )),
            ChatMessage::user(user_message),
        ];

        let response = self.inner.create_chat_completion(messages, None).await?;

        match response.first_content() {
            Some(content) => Ok(content.to_string()),
            None => {
                tracing::error!(model = self.inner.model(), "{}", NO_RESPONSE);
                Ok(NO_RESPONSE.to_string())
            }
        }
    }

    /// Like [`complete`](Self::complete), but asks for a `{"answer": ...}` JSON
    /// object and parses it
    ///
    /// # Errors
    ///
    /// Content that is not a valid answer object is a
    /// [`LlmError::SerializationError`].
    pub async fn complete_json(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<JsonAnswer, LlmError> {
        let schema = serde_json::to_string(&schemars::schema_for!(JsonAnswer))?;
        let messages = vec![
            ChatMessage::system(format!(
                "INSTRUCTION: You follow the following instructions: {}.\n\
                 FORMAT: format the answer as a JSON object matching this JSON schema: {}",
                system_prompt, schema
            )),
            ChatMessage::user(user_message),
        ];

        let response = self
            .inner
            .create_chat_completion(messages, Some(ResponseFormat::JsonObject))
            .await?;

        match response.first_content() {
            Some(content) => Ok(serde_json::from_str(content)?),
            None => {
                tracing::error!(model = self.inner.model(), "{}", NO_RESPONSE);
                Ok(JsonAnswer {
                    answer: NO_RESPONSE.to_string(),
                })
            }
        }
    }
}
