//! Handler for the user distance endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::application::services::user_service::MSG_INVALID_DISTANCE_DATA;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a user augmented with its distance to a reference point.
///
/// # Endpoint
///
/// `POST /users/distance`
///
/// # Request Body
///
/// ```json
/// { "userId": 1, "lat": -37.3159, "lng": 81.1496 }
/// ```
///
/// # Response
///
/// The upstream user object with an added `distanceMeters` field:
///
/// ```json
/// { "id": 1, "name": "Leanne Graham", "address": { ... }, "distanceMeters": 0.0 }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: User with distance
/// - **400 Bad Request**: `{"error": "Invalid data"}`
/// - **413 Payload Too Large**: Body over the 2 MB extractor limit
/// - **404 Not Found**: Upstream reported 404 (empty body)
/// - **500 Internal Server Error**: `{"error": "Invalid user geolocation data"}`
///   or `{"error": "Failed to fetch user"}`
pub async fn distance_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable distance request");
        AppError::from_json_rejection(&rejection, MSG_INVALID_DISTANCE_DATA)
    })?;

    let user = state.user_service.user_with_distance(&payload).await?;
    Ok(Json(user.into_json()))
}
