//! Tubely Storage Library
//!
//! This crate provides the thumbnail store abstraction and its in-memory
//! implementation.
//!
//! Stores are handed to the API as `Arc<dyn ThumbnailStore>` so tests get an
//! isolated instance and a durable backend can be swapped in later.

pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use memory::InMemoryThumbnailStore;
pub use traits::ThumbnailStore;
pub use tubely_core::models::Thumbnail;
