// Response builders shared by all handlers

use serde::Serialize;
use std::fmt::Display;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::models::{ApiResponse, SERVER_ERROR_BODY};

/// 201 with `{"message": "Test successful"}`
pub fn created() -> Response {
    warp::reply::with_status(warp::reply::json(&ApiResponse::success()), StatusCode::CREATED)
        .into_response()
}

/// 201 with `{"message": "Test successful", "data": ...}`
pub fn created_with<T: Serialize>(data: T) -> Response {
    warp::reply::with_status(
        warp::reply::json(&ApiResponse::with_data(data)),
        StatusCode::CREATED,
    )
    .into_response()
}

/// 400 with `{"message": "Test failed"}`
pub fn failed() -> Response {
    warp::reply::with_status(warp::reply::json(&ApiResponse::failure()), StatusCode::BAD_REQUEST)
        .into_response()
}

/// 500 with a plain-text body; the error itself is only logged
pub fn server_error(route: &str, err: impl Display) -> Response {
    tracing::error!(route, error = %err, "Request failed");
    warp::reply::with_status(SERVER_ERROR_BODY, StatusCode::INTERNAL_SERVER_ERROR).into_response()
}

/// 201 if the operation succeeded, 400 otherwise
pub fn from_outcome(success: bool) -> Response {
    if success {
        created()
    } else {
        failed()
    }
}
