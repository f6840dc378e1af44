//! Tubely Core Library
//!
//! This crate provides core domain models, error types, configuration, and the
//! ownership rule shared across all Tubely components.

pub mod access;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod thumbnail_url;

// Re-export commonly used types
pub use access::{authorize_owner, AccessDecision};
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use thumbnail_url::thumbnail_url;
