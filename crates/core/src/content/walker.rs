//! Recursive content directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ContentWalkerError {
    #[error("content directory does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk content directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered markdown file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub absolute_path: PathBuf,
    /// Path relative to the content root.
    pub relative_path: PathBuf,
}

#[derive(Debug)]
pub struct ContentWalker {
    root: PathBuf,
}

impl ContentWalker {
    pub fn new(root: &Path) -> Result<Self, ContentWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| ContentWalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(ContentWalkerError::MissingRoot(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// All markdown files under the root, sorted by relative path.
    /// Hidden entries and `node_modules` are skipped.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, ContentWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                ContentWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "node_modules"
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
