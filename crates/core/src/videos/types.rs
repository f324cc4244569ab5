use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    /// File name under the video base URL.
    #[serde(alias = "fileName")]
    pub file_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCategory {
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub videos: Vec<VideoItem>,
}

/// Flattened video record fed to the search component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSearchEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tab: &'static str,
    pub category: String,
    pub title: String,
    pub description: String,
}
