//! Frontmatter parsing from markdown documents.

use super::types::{Frontmatter, ParsedDocument};
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` at the start of the document:
/// ```markdown
/// ---
/// title: Quick start
/// ---
/// # Document content
/// ```
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let trimmed = content.trim_start();

    if !trimmed.starts_with("---") {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    }

    let after_first = &trimmed[3..];

    // Skip the newline after opening ---
    let after_newline = after_first
        .strip_prefix('\n')
        .or_else(|| after_first.strip_prefix("\r\n"))
        .unwrap_or(after_first);

    let Some(end_pos) = find_closing_delimiter(after_newline) else {
        // No closing ---, treat as no frontmatter
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    };

    let yaml_content = &after_newline[..end_pos];

    let after_closing = &after_newline[end_pos..];
    let after_closing = after_closing.trim_start_matches([' ', '\t']);
    let after_closing = &after_closing[3.min(after_closing.len())..];
    let body = after_closing
        .strip_prefix('\n')
        .or_else(|| after_closing.strip_prefix("\r\n"))
        .unwrap_or(after_closing)
        .to_string();

    let frontmatter: Frontmatter = if yaml_content.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml_content.trim())?
    };

    Ok(ParsedDocument { frontmatter: Some(frontmatter), body })
}

/// Byte offset of the line holding the closing `---`.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim() == "---" {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let doc = parse("# Hello\n\nBody\n").unwrap();
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, "# Hello\n\nBody\n");
    }

    #[test]
    fn parse_title_and_description() {
        let doc = parse("---\ntitle: 快速开始\ndescription: First steps\n---\n# Body\n")
            .unwrap();
        let fm = doc.frontmatter.unwrap();
        assert_eq!(fm.title(), Some("快速开始"));
        assert_eq!(fm.description(), Some("First steps"));
        assert!(fm.navigation());
        assert_eq!(doc.body, "# Body\n");
    }

    #[test]
    fn parse_navigation_false() {
        let doc = parse("---\nnavigation: false\n---\nhidden\n").unwrap();
        assert!(!doc.frontmatter.unwrap().navigation());
    }

    #[test]
    fn parse_empty_frontmatter() {
        let doc = parse("---\n---\nBody\n").unwrap();
        let fm = doc.frontmatter.unwrap();
        assert!(fm.fields.is_empty());
        assert_eq!(fm.title(), None);
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn parse_crlf_line_endings() {
        let doc = parse("---\r\ntitle: Win\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.frontmatter.unwrap().title(), Some("Win"));
        assert_eq!(doc.body, "Body\r\n");
    }

    #[test]
    fn unclosed_frontmatter_is_body() {
        let input = "---\ntitle: nope\nBody\n";
        let doc = parse(input).unwrap();
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(parse("---\ntitle: [unclosed\n---\n").is_err());
    }
}
