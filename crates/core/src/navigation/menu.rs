//! Built-in sidebar data and tree queries.

use super::types::{FlatMenuItem, MenuItem};

/// The built-in help-center sidebar.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("帮助中心", "/docs").expanded(true).with_children(vec![
            MenuItem::new("用户手册", "/docs/user_manual/user_register").with_children(
                vec![
                    MenuItem::new("快速开始", "/docs/user_manual/user_register"),
                    MenuItem::new("基础功能", "/docs/user_manual/jyqy"),
                    MenuItem::new("高级功能", "/docs/user_manual/yljg"),
                ],
            ),
        ]),
    ]
}

/// Depth-first listing of every entry, in document order.
pub fn flatten(items: &[MenuItem]) -> Vec<FlatMenuItem> {
    fn walk(items: &[MenuItem], depth: usize, out: &mut Vec<FlatMenuItem>) {
        for item in items {
            out.push(FlatMenuItem {
                label: item.label.clone(),
                path: item.path.clone(),
                depth,
            });
            walk(&item.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(items, 0, &mut out);
    out
}

/// First entry (depth-first) whose path equals `path`.
pub fn find_by_path<'a>(items: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| {
        if item.path == path { Some(item) } else { find_by_path(&item.children, path) }
    })
}

/// Trail of entries from the root down to the first entry matching `path`.
///
/// Empty when no entry matches.
pub fn breadcrumbs<'a>(items: &'a [MenuItem], path: &str) -> Vec<&'a MenuItem> {
    fn walk<'a>(items: &'a [MenuItem], path: &str, trail: &mut Vec<&'a MenuItem>) -> bool {
        for item in items {
            trail.push(item);
            if item.path == path || walk(&item.children, path, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    walk(items, path, &mut trail);
    trail
}
