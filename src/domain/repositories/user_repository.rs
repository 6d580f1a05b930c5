//! Repository trait for the remote user directory.

use crate::error::UpstreamError;
use async_trait::async_trait;
use serde_json::Value;

/// Repository interface over the upstream users resource.
///
/// Each method issues exactly one upstream call. User bodies are untyped
/// JSON so that upstream objects can be relayed verbatim.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpUserRepository`] - REST implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/handler_users.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, a non-success status,
    /// or an unreadable body.
    async fn list(&self) -> Result<Value, UpstreamError>;

    /// Finds a user by its identifier as it appears in the upstream path.
    ///
    /// Returns `Ok(None)` when the upstream responds with 404.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on any other failure.
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Value>, UpstreamError>;

    /// Forwards `payload` unchanged to the upstream create endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, a non-success status,
    /// or an unreadable body.
    async fn create(&self, payload: &Value) -> Result<Value, UpstreamError>;

    /// Deletes a user and returns the upstream response body.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, a non-success status,
    /// or an unreadable body.
    async fn delete(&self, user_id: &str) -> Result<Value, UpstreamError>;
}
