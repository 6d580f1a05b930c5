//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod distance;
pub mod home;
pub mod users;

pub use distance::distance_handler;
pub use home::home_handler;
pub use users::{create_user_handler, delete_user_handler, get_user_handler, list_users_handler};
