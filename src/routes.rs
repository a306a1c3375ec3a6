// Route definitions and rejection handling

use serde::de::DeserializeOwned;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::handlers::{self, reply};
use crate::state::AppState;

/// Largest accepted request body
const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let api = warp::path("api");
    let with_state = warp::any().map(move || state.clone());

    // POST /api/test
    let test = api
        .and(warp::path("test"))
        .and(warp::path::end())
        .and(warp::post())
        .and_then(handlers::test_handler);

    // POST /api/create
    let create = api
        .and(warp::path("create"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state.clone())
        .and_then(handlers::create_handler);

    // POST /api/read
    let read = api
        .and(warp::path("read"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state.clone())
        .and_then(handlers::read_handler);

    // POST /api/update
    let update = api
        .and(warp::path("update"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state.clone())
        .and_then(handlers::update_handler);

    // POST /api/delete
    let delete = api
        .and(warp::path("delete"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state.clone())
        .and_then(handlers::delete_handler);

    // POST /api/openai
    let openai = api
        .and(warp::path("openai"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state.clone())
        .and_then(handlers::openai_handler);

    // POST /api/openai-json
    let openai_json = api
        .and(warp::path("openai-json"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state.clone())
        .and_then(handlers::openai_json_handler);

    // POST /api/groq
    let groq = api
        .and(warp::path("groq"))
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body())
        .and(with_state)
        .and_then(handlers::groq_handler);

    test.or(create)
        .or(read)
        .or(update)
        .or(delete)
        .or(openai)
        .or(openai_json)
        .or(groq)
        .recover(handle_rejection)
}

/// JSON body of at most `MAX_BODY_BYTES`
fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

/// Map rejections to the same response shapes the handlers use
async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    if err.is_not_found() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        tracing::debug!(error = %e, "Rejected request body");
        return Ok(reply::failed());
    }

    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(StatusCode::PAYLOAD_TOO_LARGE.into_response());
    }

    if err.find::<warp::reject::LengthRequired>().is_some() {
        return Ok(StatusCode::LENGTH_REQUIRED.into_response());
    }

    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response());
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    Ok(reply::server_error("router", format!("{:?}", err)))
}
