//! Process-local thumbnail store.
//!
//! Entries live as long as the store value. There is no eviction and no size
//! bound; everything is lost when the process exits.

use crate::traits::ThumbnailStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tubely_core::models::Thumbnail;

#[derive(Debug, Default)]
pub struct InMemoryThumbnailStore {
    entries: RwLock<HashMap<String, Thumbnail>>,
}

impl InMemoryThumbnailStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThumbnailStore for InMemoryThumbnailStore {
    async fn get(&self, video_id: &str) -> Option<Thumbnail> {
        self.entries.read().await.get(video_id).cloned()
    }

    async fn set(&self, video_id: &str, thumbnail: Thumbnail) {
        let size = thumbnail.len();
        let replaced = self
            .entries
            .write()
            .await
            .insert(video_id.to_string(), thumbnail)
            .is_some();
        tracing::debug!(video_id = %video_id, size, replaced, "Thumbnail stored");
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
