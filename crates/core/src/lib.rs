//! Core library for a static help-center site.
//!
//! Holds the content tree model and its text extractor, the sidebar and
//! video catalog data, site configuration, and the search index built from
//! them.

pub mod config;
pub mod content;
pub mod content_ast;
pub mod counter;
pub mod frontmatter;
pub mod navigation;
pub mod search;
pub mod videos;

pub use content_ast::{ContentNode, extract_text};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
