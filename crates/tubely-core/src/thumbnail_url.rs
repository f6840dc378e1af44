//! Public URL under which a stored thumbnail is served.

use crate::constants::API_BASE;

/// Build `<base_url>/api/thumbnails/<video_id>`.
///
/// A trailing slash on `base_url` is ignored so `http://host:8091` and
/// `http://host:8091/` produce the same URL.
pub fn thumbnail_url(base_url: &str, video_id: &str) -> String {
    format!(
        "{}{}/thumbnails/{}",
        base_url.trim_end_matches('/'),
        API_BASE,
        video_id
    )
}
