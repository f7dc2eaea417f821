//! HTTP interface
//!
//! A thin axum layer over [`crate::core`]. Every request is independent;
//! the server keeps no game state, so the caller holds the secret.

pub mod api;
pub mod error;

pub use api::{GuessRequest, SecretResponse, router};
pub use error::ApiError;
