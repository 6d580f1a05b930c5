//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`upstream`] - REST client for the remote user directory

pub mod upstream;
