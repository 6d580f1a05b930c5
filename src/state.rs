//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// State shared by all request handlers.
///
/// Holds no mutable data; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    /// Builds state around any upstream repository implementation.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
