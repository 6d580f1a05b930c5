//! Handlers for the users resource (list, get, create, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::application::services::user_service::MSG_INVALID_USER_DATA;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Response Codes
///
/// - **200 OK**: Upstream array relayed verbatim
/// - **500 Internal Server Error**: `{"error": "Failed to fetch users"}`
pub async fn list_users_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Retrieves a single user.
///
/// # Endpoint
///
/// `GET /users/{user_id}`
///
/// # Response Codes
///
/// - **200 OK**: Upstream object relayed
/// - **404 Not Found**: Upstream reported 404 (empty body)
/// - **500 Internal Server Error**: `{"error": "Failed to fetch user"}`
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(Json(user))
}

/// Validates a user record and creates it upstream.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// A complete user record: `id`, `name`, `username`, `email`, `phone`,
/// `website`, `address` (with `geo`) and `company`. The body is forwarded
/// exactly as received.
///
/// # Response Codes
///
/// - **201 Created**: Upstream object relayed
/// - **400 Bad Request**: `{"error": "Invalid user data"}`
/// - **413 Payload Too Large**: Body over the 2 MB extractor limit
/// - **500 Internal Server Error**: `{"error": "Failed to create user"}`
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable user payload");
        AppError::from_json_rejection(&rejection, MSG_INVALID_USER_DATA)
    })?;

    let created = state.user_service.create_user(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Deletes a user upstream.
///
/// # Endpoint
///
/// `DELETE /users/{user_id}`
///
/// # Response Codes
///
/// - **200 OK**: Upstream body relayed (typically `{}`)
/// - **500 Internal Server Error**: `{"error": "Failed to delete user"}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let body = state.user_service.delete_user(&user_id).await?;
    Ok(Json(body))
}
