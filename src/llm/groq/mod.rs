//! Groq provider
//!
//! Forwards a caller-supplied chat history as-is.

pub mod client;

pub use client::GroqClient;
