//! OpenAI provider
//!
//! Single-turn completions with a system instruction, in plain text or JSON
//! mode.

pub mod client;

pub use client::{OpenAiClient, NO_RESPONSE};
