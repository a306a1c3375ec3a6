// Handlers module

pub mod entity;
pub mod llm;
pub mod reply;

pub use entity::{create_handler, delete_handler, read_handler, update_handler};
pub use llm::{groq_handler, openai_handler, openai_json_handler};
pub use test::test_handler;
