use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::content::ContentDocument;
use crate::content_ast::extract_text;
use crate::search::types::{SearchEntry, SearchHit};
use crate::videos::{VideoCategory, search_entries};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write search index {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error("failed to read search index {0}: {1}")]
    Read(String, #[source] std::io::Error),
}

const TITLE_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 2;
const CONTENT_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Docs first (in the given order), then videos in catalog order.
    /// Pages with `navigation: false` are left out.
    pub fn build(documents: &[ContentDocument], videos: &[VideoCategory]) -> Self {
        let docs = documents.iter().filter(|d| d.navigation).map(|d| SearchEntry::Doc {
            path: d.route.clone(),
            title: d.title.clone(),
            description: d.description.clone(),
            content: extract_text(&d.body),
        });

        let vids = search_entries(videos).into_iter().map(|v| SearchEntry::Video {
            tab: v.tab.to_string(),
            category: v.category,
            title: v.title,
            description: v.description,
        });

        let entries: Vec<SearchEntry> = docs.chain(vids).collect();
        debug!(entries = entries.len(), "built search index");
        Self { entries }
    }

    pub fn from_entries(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive search; every term must appear somewhere in the entry.
    ///
    /// Title hits weigh 3, description hits 2, content hits 1. Results are
    /// ordered by score, ties keep index order.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit<'_>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .filter_map(|entry| score(entry, &terms).map(|score| SearchHit { entry, score }))
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        hits
    }

    pub fn to_json(&self) -> Result<String, SearchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), SearchError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SearchError::Write(path.display().to_string(), e))
    }

    pub fn read_from(path: &Path) -> Result<Self, SearchError> {
        let json = fs::read_to_string(path)
            .map_err(|e| SearchError::Read(path.display().to_string(), e))?;
        Ok(serde_json::from_str(&json)?)
    }
}

fn score(entry: &SearchEntry, terms: &[String]) -> Option<u32> {
    let title = entry.title().to_lowercase();
    let description = entry.description().unwrap_or_default().to_lowercase();
    let content = entry.content().to_lowercase();

    let mut total = 0;
    for term in terms {
        let term = term.as_str();
        let mut term_score = 0;
        if title.contains(term) {
            term_score += TITLE_WEIGHT;
        }
        if description.contains(term) {
            term_score += DESCRIPTION_WEIGHT;
        }
        if content.contains(term) {
            term_score += CONTENT_WEIGHT;
        }
        if term_score == 0 {
            return None;
        }
        total += term_score;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_ast::ContentNode;
    use crate::videos::default_catalog;
    use std::path::PathBuf;

    fn doc(route: &str, title: &str, body: &str, navigation: bool) -> ContentDocument {
        ContentDocument {
            route: route.to_string(),
            relative_path: PathBuf::from(format!("{}.md", route.trim_start_matches('/'))),
            title: title.to_string(),
            description: None,
            navigation,
            body: ContentNode::from_markdown(body),
        }
    }

    fn sample() -> SearchIndex {
        let docs = vec![
            doc("/docs/a", "Register an account", "Open the signup page.", true),
            doc("/docs/b", "Import data", "Upload a CSV to register rows.", true),
            doc("/docs/hidden", "Register secrets", "hidden", false),
        ];
        SearchIndex::build(&docs, &default_catalog())
    }

    #[test]
    fn build_skips_hidden_docs_and_appends_videos() {
        let index = sample();
        assert_eq!(index.len(), 2 + 6);
        assert_eq!(index.entries()[0].kind(), "doc");
        assert_eq!(index.entries()[2].kind(), "video");
        assert!(!index.entries().iter().any(|e| e.title() == "Register secrets"));
    }

    #[test]
    fn doc_content_is_extracted_text() {
        let index = sample();
        assert_eq!(index.entries()[1].content(), "Upload a CSV to register rows.");
    }

    #[test]
    fn title_hits_rank_above_content_hits() {
        let index = sample();
        let hits = index.search("REGISTER", None);
        let titles: Vec<&str> = hits.iter().map(|h| h.entry.title()).collect();
        assert_eq!(titles, vec!["Register an account", "Import data"]);
        assert_eq!(hits[0].score, 3);
        assert_eq!(hits[1].score, 1);
    }

    #[test]
    fn all_terms_must_match() {
        let index = sample();
        assert_eq!(index.search("import csv", None).len(), 1);
        assert!(index.search("import unicorn", None).is_empty());
    }

    #[test]
    fn videos_are_searchable_by_description() {
        let index = sample();
        let hits = index.search("权限", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.title(), "权限管理");
    }

    #[test]
    fn description_outranks_content_in_prebuilt_index() {
        let index = SearchIndex::from_entries(vec![
            SearchEntry::Doc {
                path: "/docs/a".into(),
                title: "A".into(),
                description: None,
                content: "export reports".into(),
            },
            SearchEntry::Video {
                tab: "main".into(),
                category: "Reports".into(),
                title: "B".into(),
                description: "how to export".into(),
            },
        ]);
        assert_eq!(index.len(), 2);

        let hits = index.search("Export", None);
        assert_eq!(hits.iter().map(|h| h.entry.title()).collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(hits[0].score, DESCRIPTION_WEIGHT);
        assert_eq!(hits[1].score, CONTENT_WEIGHT);

        // a video's category is its searchable content
        assert_eq!(index.search("reports", None).len(), 2);
    }

    #[test]
    fn empty_query_and_limit() {
        let index = sample();
        assert!(index.search("   ", None).is_empty());
        assert_eq!(index.search("演示", Some(2)).len(), 2);
    }

    #[test]
    fn json_round_trips_through_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("search.json");
        let index = sample();
        index.write_to(&path).unwrap();
        assert_eq!(SearchIndex::read_from(&path).unwrap(), index);

        let value: serde_json::Value =
            serde_json::from_str(&index.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["type"], "doc");
        assert_eq!(value[2]["type"], "video");
        assert_eq!(value[2]["tab"], "main");
    }
}
