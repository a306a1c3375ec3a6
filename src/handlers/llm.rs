// POST /api/{openai,openai-json,groq} handlers

use std::convert::Infallible;
use warp::reply::Response;

use super::reply;
use crate::models::{ChatRequest, CompletionRequest};
use crate::state::AppState;

pub async fn openai_handler(
    request: CompletionRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    tracing::info!("POST /api/openai");

    let (Some(prompt), Some(user_message)) = (request.prompt, request.user_message) else {
        return Ok(reply::failed());
    };

    Ok(match state.openai.complete(&prompt, &user_message).await {
        Ok(text) => reply::created_with(text),
        Err(e) => reply::server_error("openai", e),
    })
}

pub async fn openai_json_handler(
    request: CompletionRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    tracing::info!("POST /api/openai-json");

    let (Some(prompt), Some(user_message)) = (request.prompt, request.user_message) else {
        return Ok(reply::failed());
    };

    Ok(match state.openai.complete_json(&prompt, &user_message).await {
        Ok(answer) => reply::created_with(answer),
        Err(e) => reply::server_error("openai-json", e),
    })
}

pub async fn groq_handler(request: ChatRequest, state: AppState) -> Result<Response, Infallible> {
    tracing::info!(messages = request.messages.as_ref().map(Vec::len), "POST /api/groq");

    let Some(messages) = request.messages else {
        return Ok(reply::failed());
    };

    Ok(match state.groq.chat_complete(messages).await {
        Ok(text) => reply::created_with(text),
        Err(e) => reply::server_error("groq", e),
    })
}
