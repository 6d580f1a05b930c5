//! Repository trait definitions for the domain layer.
//!
//! Repositories abstract the upstream user directory so the application
//! layer never sees HTTP details.
//!
//! # Architecture
//!
//! - Traits define the contract for upstream operations
//! - Implementations live in `crate::infrastructure::upstream`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
