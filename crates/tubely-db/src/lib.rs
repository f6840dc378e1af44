//! Database repositories for the data access layer
//!
//! The video metadata store is reached through the `VideoRepository` trait so
//! handlers do not depend on a particular database.

pub mod db;

pub use db::pool::{connect, connect_in_memory, MIGRATOR};
pub use db::video::{SqliteVideoRepository, VideoRepository};
