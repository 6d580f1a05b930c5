//! Handler for the home endpoint.

use axum::Json;

use crate::api::dto::home::HomeResponse;

/// Returns a fixed greeting, used for health checking.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "status": "Ok", "message": "Hello World!" }
/// ```
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse::default())
}
