//! Thumbnail store abstraction trait

use async_trait::async_trait;
use tubely_core::models::Thumbnail;

/// Mapping from video identifier to its current thumbnail.
///
/// One entry per video. `set` replaces any previous entry for the key. Absence
/// is a normal answer, not an error, so neither operation can fail.
///
/// Implementations must make `get` and `set` atomic with respect to each other:
/// a reader sees either the old entry or the new one, never a mix.
#[async_trait]
pub trait ThumbnailStore: Send + Sync {
    /// Current thumbnail for `video_id`, if one was ever stored.
    async fn get(&self, video_id: &str) -> Option<Thumbnail>;

    /// Store `thumbnail` for `video_id`, overwriting any existing entry.
    async fn set(&self, video_id: &str, thumbnail: Thumbnail);

    /// Number of videos that currently have a thumbnail.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
