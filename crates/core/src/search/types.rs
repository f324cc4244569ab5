use serde::{Deserialize, Serialize};

/// One searchable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchEntry {
    Doc {
        path: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Plain text of the page body.
        content: String,
    },
    Video {
        tab: String,
        category: String,
        title: String,
        description: String,
    },
}

impl SearchEntry {
    pub fn title(&self) -> &str {
        match self {
            Self::Doc { title, .. } | Self::Video { title, .. } => title,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Doc { description, .. } => description.as_deref(),
            Self::Video { description, .. } => Some(description),
        }
    }

    /// Body text; videos have none beyond their category.
    pub fn content(&self) -> &str {
        match self {
            Self::Doc { content, .. } => content,
            Self::Video { category, .. } => category,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Doc { .. } => "doc",
            Self::Video { .. } => "video",
        }
    }
}

/// A scored search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub entry: &'a SearchEntry,
    pub score: u32,
}
