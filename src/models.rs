// Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::llm::ChatMessage;

/// Message sent with every 201 response
pub const SUCCESS_MESSAGE: &str = "Test successful";
/// Message sent with every 400 response
pub const FAILURE_MESSAGE: &str = "Test failed";
/// Plain-text body of every 500 response
pub const SERVER_ERROR_BODY: &str = "Server Error";

// Request Types
//
// Fields are optional so that a missing value is answered with a 400 instead
// of a body rejection.

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub value: Option<String>,
}

/// Body of `read` and `delete`
#[derive(Debug, Clone, Deserialize)]
pub struct IdRequest {
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub id: Option<i32>,
    pub value: Option<String>,
}

/// Body of `openai` and `openai-json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub prompt: Option<String>,
    pub user_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Option<Vec<ChatMessage>>,
}

// Response Types

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    pub fn success() -> Self {
        Self {
            message: SUCCESS_MESSAGE,
            data: None,
        }
    }

    pub fn failure() -> Self {
        Self {
            message: FAILURE_MESSAGE,
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            message: SUCCESS_MESSAGE,
            data: Some(data),
        }
    }
}
