// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// Entity persistence
pub mod store;

// LLM proxy
pub mod llm;

#[cfg(test)]
mod test_support;
