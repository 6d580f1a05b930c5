//! # Users Gateway
//!
//! A small HTTP façade over a remote REST users service, built with Axum.
//! It validates user records before forwarding them upstream and adds a
//! geodistance endpoint on top of the upstream data.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - User shapes, validation, haversine distance, repository trait
//! - **Application Layer** ([`application`]) - Request orchestration and error mapping
//! - **Infrastructure Layer** ([`infrastructure`]) - REST client for the upstream directory
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET /` - liveness greeting
//! - `GET /users`, `GET /users/{id}`, `POST /users`, `DELETE /users/{id}` - proxied CRUD
//! - `POST /users/distance` - upstream user plus `distanceMeters` to a given point
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_BASE_URL="https://jsonplaceholder.typicode.com"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, UserWithDistance};
    pub use crate::domain::geo::distance_meters;
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::{AppError, UpstreamError};
    pub use crate::infrastructure::upstream::HttpUserRepository;
    pub use crate::state::AppState;
}
