//! Extract command: print the plain text of a content file.

use std::io::Read;
use std::path::Path;
use std::{fs, io};

use helpsite_core::content_ast::{ContentNode, extract_text};
use tracing::debug;

pub fn run(file: &Path) {
    let node = match load_node(file) {
        Ok(node) => node,
        Err(e) => {
            eprintln!("Error reading {}: {}", file.display(), e);
            crate::logging::flush();
            std::process::exit(1);
        }
    };

    println!("{}", extract_text(&node));
}

fn load_node(file: &Path) -> Result<ContentNode, String> {
    let is_stdin = file.as_os_str() == "-";
    let input = if is_stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|e| e.to_string())?;
        buf
    } else {
        fs::read_to_string(file).map_err(|e| e.to_string())?
    };

    let is_json = is_stdin
        || file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        debug!("parsing {} as a JSON content tree", file.display());
        let value: serde_json::Value = serde_json::from_str(&input).map_err(|e| e.to_string())?;
        Ok(ContentNode::from(unwrap_document(value)))
    } else {
        Ok(ContentNode::from_markdown(&input))
    }
}

/// A parsed-document dump wraps its tree in `body`. Objects that are nodes
/// themselves (carrying `value` or `children`) are used as they are.
fn unwrap_document(mut value: serde_json::Value) -> serde_json::Value {
    let is_node = value.get("value").is_some() || value.get("children").is_some();
    if is_node {
        return value;
    }
    value.get_mut("body").map(serde_json::Value::take).unwrap_or(value)
}
