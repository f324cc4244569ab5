//! Markdown content discovery and loading.

pub mod document;
pub mod walker;

pub use document::{ContentDocument, ContentError, load_all, load_document, route_for};
pub use walker::{ContentWalker, ContentWalkerError, WalkedFile};
