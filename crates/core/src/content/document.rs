//! Loading a markdown file into a routed, titled content document.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::content::walker::{ContentWalker, ContentWalkerError};
use crate::content_ast::{ContentNode, parse_markdown};
use crate::frontmatter::{self, FrontmatterParseError};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Walk(#[from] ContentWalkerError),

    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("bad frontmatter in {0}: {1}")]
    Frontmatter(String, #[source] FrontmatterParseError),
}

/// A parsed content page.
#[derive(Debug, Clone)]
pub struct ContentDocument {
    /// Site route, e.g. `/docs/user_manual/jyqy`.
    pub route: String,
    pub relative_path: PathBuf,
    pub title: String,
    pub description: Option<String>,
    /// False when the page opted out of navigation and search.
    pub navigation: bool,
    pub body: ContentNode,
}

// Ordering prefix on file and directory names: `1.guide`, `02.setup`
static ORDER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("static regex"));

/// Site route for a content file path relative to the content root.
pub fn route_for(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .map(|s| ORDER_PREFIX_RE.replace(&s, "").to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    format!("/{}", segments.join("/"))
}

/// Read and parse one content file.
pub fn load_document(path: &Path, relative: &Path) -> Result<ContentDocument, ContentError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ContentError::Read(path.display().to_string(), e))?;

    let parsed = frontmatter::parse(&content)
        .map_err(|e| ContentError::Frontmatter(path.display().to_string(), e))?;

    let fm = parsed.frontmatter.unwrap_or_default();
    let markdown = parse_markdown(&parsed.body);
    let title = fm
        .title()
        .map(ToOwned::to_owned)
        .or(markdown.first_heading)
        .unwrap_or_else(|| {
            relative.file_stem().and_then(|s| s.to_str()).unwrap_or("Untitled").to_string()
        });

    Ok(ContentDocument {
        route: route_for(relative),
        relative_path: relative.to_path_buf(),
        title,
        description: fm.description().map(ToOwned::to_owned),
        navigation: fm.navigation(),
        body: markdown.tree,
    })
}

/// Load every markdown document under `content_dir`, in path order.
///
/// Files with unparseable frontmatter are skipped with a warning.
pub fn load_all(content_dir: &Path) -> Result<Vec<ContentDocument>, ContentError> {
    let walker = ContentWalker::new(content_dir)?;
    let files = walker.walk()?;
    debug!(count = files.len(), root = %walker.root().display(), "discovered content files");

    let mut documents = Vec::with_capacity(files.len());
    for file in files {
        match load_document(&file.absolute_path, &file.relative_path) {
            Ok(doc) => documents.push(doc),
            Err(e @ ContentError::Frontmatter(..)) => {
                warn!("skipping {}: {}", file.relative_path.display(), e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(documents)
}
