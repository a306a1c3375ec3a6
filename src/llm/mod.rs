//! LLM proxy
//!
//! Thin clients for two OpenAI-compatible chat-completion providers: OpenAI
//! (plain and JSON-mode completions) and Groq (chat over an arbitrary message
//! list). Each call is a single request/response round trip with no retries.

pub mod core;
pub mod groq;
pub mod http;
pub mod openai;

// Re-export commonly used types
pub use core::{
    config::ProviderConfig,
    error::LlmError,
    types::{ChatMessage, ChatRole, JsonAnswer},
};
pub use groq::GroqClient;
pub use http::ChatCompletionClient;
pub use openai::OpenAiClient;
