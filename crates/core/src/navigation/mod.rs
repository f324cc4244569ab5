//! Documentation sidebar navigation tree.

pub mod menu;
pub mod types;

pub use menu::{breadcrumbs, default_menu, find_by_path, flatten};
pub use types::{FlatMenuItem, MenuItem};
