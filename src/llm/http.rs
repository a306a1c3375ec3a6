//! Shared transport for OpenAI-compatible providers

use reqwest::Client;
use std::time::Duration;

use crate::llm::core::{
    config::ProviderConfig,
    error::LlmError,
    types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat},
};

/// Client for a single OpenAI-compatible `chat/completions` endpoint
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Provider settings
    config: ProviderConfig,
}

impl ChatCompletionClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Send one chat completion request and decode the response
    pub async fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        response_format: Option<ResponseFormat>,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            response_format,
        };

        let url = self.build_endpoint_url();
        tracing::debug!(%url, model = %request.model, messages = request.messages.len(), "Sending chat completion");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<ChatCompletionResponse>().await?)
    }
}
