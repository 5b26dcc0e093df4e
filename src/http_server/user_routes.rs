//! # User HTTP Routes
//!
//! Endpoints for user CRUD under `/api/users`. Each handler is a thin
//! pass-through: decode the body, call the service, wrap the outcome in
//! the response envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::Value;

use crate::model::{CreateUser, UpdateUser};
use crate::service::UserService;
use crate::store::UserStore;

use super::errors::{ApiError, ApiResult};
use super::response::{
    CreatedResponse, DeletedResponse, ListResponse, SingleResponse, UpdatedResponse,
};

/// Shared state type
type ServiceState<S> = Arc<UserService<S>>;

/// Create the user routes
pub fn user_routes<S: UserStore + 'static>(service: ServiceState<S>) -> Router {
    Router::new()
        .route("/users", post(create_user_handler::<S>))
        .route("/users", get(list_users_handler::<S>))
        .route("/users/:id", get(get_user_handler::<S>))
        .route("/users/:id", patch(update_user_handler::<S>))
        .route("/users/:id", delete(delete_user_handler::<S>))
        .with_state(service)
}

/// Decode a request body into the expected input shape
///
/// Decoding failures (missing email, wrong types) come back as 400s in the
/// failure envelope rather than as the framework's rejection body.
fn decode_body<T: serde::de::DeserializeOwned>(body: Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))
}

/// POST /api/users - create a user
async fn create_user_handler<S: UserStore + 'static>(
    State(service): State<ServiceState<S>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let input: CreateUser = decode_body(body)?;

    let user = service.create(input)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(user))))
}

/// GET /api/users - list all users, most recent first
async fn list_users_handler<S: UserStore + 'static>(
    State(service): State<ServiceState<S>>,
) -> ApiResult<Json<ListResponse>> {
    let users = service.list()?;
    Ok(Json(ListResponse::new(users)))
}

/// GET /api/users/:id - fetch a user by id
async fn get_user_handler<S: UserStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleResponse>> {
    let user = service.get(&id)?;
    Ok(Json(SingleResponse::new(user)))
}

/// PATCH /api/users/:id - partial update
async fn update_user_handler<S: UserStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<UpdatedResponse>> {
    let update: UpdateUser = decode_body(body)?;

    let user = service.update(&id, update)?;
    Ok(Json(UpdatedResponse::new(&id, user)))
}

/// DELETE /api/users/:id - delete a user
async fn delete_user_handler<S: UserStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    service.delete(&id)?;
    Ok(Json(DeletedResponse::new(&id)))
}
