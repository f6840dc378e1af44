//! Application-wide constants.

/// Base path for every API route.
pub const API_BASE: &str = "/api";

/// Multipart field that carries the uploaded thumbnail file.
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Default upper bound for an uploaded thumbnail: 10 MiB.
pub const MAX_THUMBNAIL_SIZE_BYTES: usize = 10 << 20;

/// Media type recorded when an uploaded part does not declare one.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Thumbnails are served uncached so a replaced image is visible immediately.
pub const THUMBNAIL_CACHE_CONTROL: &str = "no-store";
