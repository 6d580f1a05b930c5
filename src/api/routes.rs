//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, distance_handler, get_user_handler,
    list_users_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes for the users resource.
///
/// # Endpoints
///
/// - `GET    /users`             - List users
/// - `POST   /users`             - Validate and create a user
/// - `POST   /users/distance`    - User with distance to a reference point
/// - `GET    /users/{user_id}`   - Retrieve a user
/// - `DELETE /users/{user_id}`   - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/distance", post(distance_handler))
        .route(
            "/users/{user_id}",
            get(get_user_handler).delete(delete_user_handler),
        )
}
