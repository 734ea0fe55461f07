//! HTTP handlers for user operations
//!
//! Handlers translate HTTP verbs, paths, and bodies into calls on the
//! validation layer and the store, and map outcomes to status codes. They
//! hold no logic of their own beyond that mapping.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::error::ApiError;
use crate::core::service::UserService;
use crate::core::user::User;
use crate::core::validation::{CreateUserRequest, UpdateUserRequest, parse_search_query};

/// Application state shared across handlers
///
/// The store is injected, not a process-wide singleton, so tests can wire
/// an isolated instance per server.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
}

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub detail: String,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "ok" }))
}

/// POST /users
///
/// Returns the bare id of the created user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<u64>, ApiError> {
    let user = state.users.create(payload.validate()?).await?;

    tracing::debug!(id = user.id, "created user");
    Ok(Json(user.id))
}

/// GET /users
///
/// An empty collection maps to 404 at this boundary.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;

    if users.is_empty() {
        return Err(ApiError::NoMatches);
    }
    Ok(Json(users))
}

/// GET /users/search?username=&age=&gender=
///
/// Validation runs over the raw query pairs so an extra key fails with 422
/// rather than being silently ignored. No match maps to 404.
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let filter = parse_search_query(&params)?;

    let matches = state.users.filter(&filter).await?;
    if matches.is_empty() {
        return Err(ApiError::NoMatches);
    }
    Ok(Json(matches))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let id = require_positive_id(id)?;

    state
        .users
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound { id: id as i64 })
}

/// PATCH /users/{id}
///
/// Applies only the fields present in the body; returns the updated user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let id = require_positive_id(id)?;

    let patch = payload.validate()?;
    let user = state.users.update(id, patch).await?;

    tracing::debug!(id = user.id, "updated user");
    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = require_positive_id(id)?;

    state.users.delete(id).await?;

    tracing::debug!(id, "deleted user");
    Ok(Json(DeleteResponse {
        detail: format!("User: {}, Successfully Deleted.", id),
    }))
}

/// Path ids at or below zero can never name a live user; they map to 404
/// before touching the store.
fn require_positive_id(id: i64) -> Result<u64, ApiError> {
    if id <= 0 {
        return Err(ApiError::NotFound { id });
    }
    Ok(id as u64)
}
