//! Tubely API Library
//!
//! This crate provides the HTTP handlers, authentication helpers, and
//! application setup for the thumbnail service.

mod api_doc;
pub mod auth;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
mod utils;

// Re-exports
pub use api_doc::ApiDoc;
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
