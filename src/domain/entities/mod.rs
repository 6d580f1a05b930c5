//! Core domain entities.
//!
//! - [`NewUser`] - A user record submitted for creation, with [`Address`],
//!   [`GeoPoint`] and [`Company`]
//! - [`UserWithDistance`] - An upstream user augmented with a computed distance

pub mod user;

pub use user::{Address, Company, GeoPoint, NewUser, UserWithDistance};
