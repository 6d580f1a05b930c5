//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: it validates payloads, calls
//! the upstream repository and computes derived fields. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD proxying and distance augmentation

pub mod services;
