//! User gateway service.

use crate::domain::entities::UserWithDistance;
use crate::domain::geo::{distance_meters, user_coordinates};
use crate::domain::repositories::UserRepository;
use crate::domain::validation::{validate_distance_request, validate_new_user};
use crate::error::{AppError, UpstreamError};
use serde_json::Value;
use std::sync::Arc;

pub const MSG_FETCH_USERS_FAILED: &str = "Failed to fetch users";
pub const MSG_FETCH_USER_FAILED: &str = "Failed to fetch user";
pub const MSG_CREATE_USER_FAILED: &str = "Failed to create user";
pub const MSG_DELETE_USER_FAILED: &str = "Failed to delete user";
pub const MSG_INVALID_USER_DATA: &str = "Invalid user data";
pub const MSG_INVALID_DISTANCE_DATA: &str = "Invalid data";
pub const MSG_INVALID_GEOLOCATION: &str = "Invalid user geolocation data";

/// Logs an upstream failure and collapses it into the route's public error.
fn upstream_failure(message: &'static str) -> impl FnOnce(UpstreamError) -> AppError {
    move |err| {
        tracing::error!(kind = err.kind(), error = %err, "{message}");
        AppError::upstream(message)
    }
}

/// Service fronting the upstream user directory.
///
/// Validates inbound payloads, issues one upstream call per operation and
/// maps failures onto the public error model:
/// - invalid payloads become [`AppError::Validation`]
/// - upstream 404 on a by-id lookup becomes [`AppError::NotFound`]
/// - every other upstream failure becomes [`AppError::Upstream`]
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users, relaying the upstream body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the upstream call fails.
    pub async fn list_users(&self) -> Result<Value, AppError> {
        self.repository
            .list()
            .await
            .map_err(upstream_failure(MSG_FETCH_USERS_FAILED))
    }

    /// Retrieves a single user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the upstream reports 404.
    /// Returns [`AppError::Upstream`] on any other upstream failure.
    pub async fn get_user(&self, user_id: &str) -> Result<Value, AppError> {
        self.repository
            .find_by_id(user_id)
            .await
            .map_err(upstream_failure(MSG_FETCH_USER_FAILED))?
            .ok_or_else(AppError::not_found)
    }

    /// Validates `payload` and forwards it unchanged to the upstream.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload is not a complete user
    /// record. Returns [`AppError::Upstream`] if the upstream call fails.
    pub async fn create_user(&self, payload: &Value) -> Result<Value, AppError> {
        if let Err(e) = validate_new_user(payload) {
            tracing::debug!(error = %e, "Rejected user payload");
            return Err(AppError::bad_request(MSG_INVALID_USER_DATA));
        }

        self.repository
            .create(payload)
            .await
            .map_err(upstream_failure(MSG_CREATE_USER_FAILED))
    }

    /// Deletes a user, relaying the upstream body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the upstream call fails.
    pub async fn delete_user(&self, user_id: &str) -> Result<Value, AppError> {
        self.repository
            .delete(user_id)
            .await
            .map_err(upstream_failure(MSG_DELETE_USER_FAILED))
    }

    /// Fetches the requested user and computes its distance to the
    /// reference point in the request.
    ///
    /// # Flow
    ///
    /// 1. Validate `userId`, `lat`, `lng` are numbers
    /// 2. Fetch the user upstream
    /// 3. Parse `address.geo.lat` / `address.geo.lng`
    /// 4. Compute the haversine distance in meters
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed request,
    /// [`AppError::NotFound`] if the upstream reports 404, and
    /// [`AppError::Upstream`] if the upstream call fails or the user's
    /// geolocation cannot be parsed.
    pub async fn user_with_distance(&self, payload: &Value) -> Result<UserWithDistance, AppError> {
        let request = validate_distance_request(payload).map_err(|e| {
            tracing::debug!(error = %e, "Rejected distance request");
            AppError::bad_request(MSG_INVALID_DISTANCE_DATA)
        })?;

        let user = self
            .repository
            .find_by_id(&request.user_id_segment())
            .await
            .map_err(upstream_failure(MSG_FETCH_USER_FAILED))?
            .ok_or_else(AppError::not_found)?;

        let (user_lat, user_lng) = user_coordinates(&user).map_err(|e| {
            tracing::error!(error = %e, "{MSG_INVALID_GEOLOCATION}");
            AppError::upstream(MSG_INVALID_GEOLOCATION)
        })?;

        let Value::Object(fields) = user else {
            tracing::error!("Upstream user is not a JSON object");
            return Err(AppError::upstream(MSG_FETCH_USER_FAILED));
        };

        let distance = distance_meters(request.lat, request.lng, user_lat, user_lng);

        Ok(UserWithDistance::new(fields, distance))
    }
}
