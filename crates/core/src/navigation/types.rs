use serde::{Deserialize, Serialize};

/// One entry of the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
    /// Whether the entry starts expanded in the sidebar.
    #[serde(default, alias = "defaultExpanded")]
    pub default_expanded: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            default_expanded: false,
            children: Vec::new(),
        }
    }

    pub fn expanded(mut self, value: bool) -> Self {
        self.default_expanded = value;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A menu entry with its nesting depth, as produced by [`super::flatten`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatMenuItem {
    pub label: String,
    pub path: String,
    /// 0 for top-level entries.
    pub depth: usize,
}
