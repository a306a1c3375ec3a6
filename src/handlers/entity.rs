// POST /api/{create,read,update,delete} handlers

use std::convert::Infallible;
use warp::reply::Response;

use super::reply;
use crate::models::{CreateRequest, IdRequest, UpdateRequest};
use crate::state::AppState;

pub async fn create_handler(
    request: CreateRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    tracing::info!("POST /api/create");

    let Some(value) = request.value else {
        return Ok(reply::failed());
    };

    Ok(match state.store.create(&value).await {
        Ok(created) => reply::from_outcome(created),
        Err(e) => reply::server_error("create", e),
    })
}

pub async fn read_handler(request: IdRequest, state: AppState) -> Result<Response, Infallible> {
    tracing::info!(id = ?request.id, "POST /api/read");

    let Some(id) = request.id else {
        return Ok(reply::failed());
    };

    Ok(match state.store.read(id).await {
        Ok(Some(entity)) => reply::created_with(entity),
        Ok(None) => reply::failed(),
        Err(e) => reply::server_error("read", e),
    })
}

pub async fn update_handler(
    request: UpdateRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    tracing::info!(id = ?request.id, "POST /api/update");

    let (Some(id), Some(value)) = (request.id, request.value) else {
        return Ok(reply::failed());
    };

    Ok(match state.store.update(id, &value).await {
        Ok(updated) => reply::from_outcome(updated),
        Err(e) => reply::server_error("update", e),
    })
}

pub async fn delete_handler(request: IdRequest, state: AppState) -> Result<Response, Infallible> {
    tracing::info!(id = ?request.id, "POST /api/delete");

    let Some(id) = request.id else {
        return Ok(reply::failed());
    };

    Ok(match state.store.delete(id).await {
        Ok(deleted) => reply::from_outcome(deleted),
        Err(e) => reply::server_error("delete", e),
    })
}
