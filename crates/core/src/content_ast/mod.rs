//! Content tree model and plain-text extraction for search indexing.
//!
//! Trees arrive either as loosely-typed JSON emitted by an upstream content
//! parser, or are built here from Markdown with comrak. Either way extraction
//! is a pure read-only projection of the tree.

pub mod comrak;
pub mod extract;
pub mod types;

// Re-export primary API
pub use self::comrak::{MarkdownContent, parse_markdown};
pub use extract::extract_text;
pub use types::ContentNode;
