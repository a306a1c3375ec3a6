// Shared handler state

use std::sync::Arc;

use crate::llm::{GroqClient, OpenAiClient};
use crate::store::EntityStore;

/// Collaborators injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    pub openai: OpenAiClient,
    pub groq: GroqClient,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, openai: OpenAiClient, groq: GroqClient) -> Self {
        Self {
            store,
            openai,
            groq,
        }
    }
}
