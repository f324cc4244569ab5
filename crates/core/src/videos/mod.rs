//! Tutorial video catalog.

pub mod catalog;
pub mod types;

pub use catalog::{VIDEO_BASE_URL, default_catalog, find_video, search_entries, video_url};
pub use types::{VideoCategory, VideoItem, VideoSearchEntry};
