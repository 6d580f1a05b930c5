//! Data Transfer Objects for API responses.
//!
//! User bodies are relayed as untyped JSON; only the fixed service
//! responses get their own types.

pub mod home;
