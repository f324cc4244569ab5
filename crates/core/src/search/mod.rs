//! Client-side search index over docs pages and tutorial videos.

pub mod index;
pub mod types;

pub use index::{SearchError, SearchIndex};
pub use types::{SearchEntry, SearchHit};
