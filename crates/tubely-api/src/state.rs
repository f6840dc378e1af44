//! Shared application state handed to every handler.

use std::sync::Arc;

use tubely_core::Config;
use tubely_db::VideoRepository;
use tubely_storage::ThumbnailStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    pub thumbnails: Arc<dyn ThumbnailStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoRepository>,
        thumbnails: Arc<dyn ThumbnailStore>,
    ) -> Self {
        Self {
            config,
            videos,
            thumbnails,
        }
    }
}
