//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Liveness greeting
//! - `/users*`        - Users resource proxied to the upstream directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::home_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with tracing, without path normalization.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .merge(api::routes::user_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/users/` reaches the
/// same handler as `/users`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
