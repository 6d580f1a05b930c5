//! Domain layer: user record shapes, validation and geodistance.
//!
//! # Architecture
//!
//! - [`entities`] - User record data structures
//! - [`validation`] - Schema checks for inbound payloads
//! - [`geo`] - Haversine distance and coordinate parsing
//! - [`repositories`] - Upstream user directory trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Validation and distance computation are pure functions
//! - Business flow is orchestrated in [`crate::application::services`]

pub mod entities;
pub mod geo;
pub mod repositories;
pub mod validation;
