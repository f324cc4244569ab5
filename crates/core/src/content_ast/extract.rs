//! Depth-first plain-text projection of a content tree.

use super::types::ContentNode;

/// Flatten a content tree into space-joined plain text.
///
/// - absent nodes render as the empty string
/// - a leaf renders as its own text
/// - a composite with a non-empty `value` renders as that value, and its
///   `children` are **not** visited
/// - otherwise the children are rendered in order and joined with one space
///
/// The value-before-children precedence drops the children of any node that
/// carries both. Search content built elsewhere relies on this exact output,
/// so it is kept as-is.
///
/// Traversal uses an explicit stack, so nesting depth is bounded by memory
/// rather than by the thread stack.
pub fn extract_text(node: &ContentNode) -> String {
    let mut pending = vec![Step::Visit(node)];
    let mut rendered: Vec<String> = Vec::new();

    while let Some(step) = pending.pop() {
        match step {
            Step::Visit(node) => match node {
                ContentNode::Absent => rendered.push(String::new()),
                ContentNode::Leaf(text) => rendered.push(text.clone()),
                ContentNode::Composite { value: Some(value), .. } if !value.is_empty() => {
                    rendered.push(value.clone())
                }
                ContentNode::Composite { children: Some(children), .. } => {
                    pending.push(Step::Join(children.len()));
                    pending.extend(children.iter().rev().map(Step::Visit));
                }
                ContentNode::Composite { .. } => rendered.push(String::new()),
            },
            Step::Join(count) => {
                let parts = rendered.split_off(rendered.len() - count);
                rendered.push(parts.join(" "));
            }
        }
    }

    rendered.pop().unwrap_or_default()
}

enum Step<'a> {
    Visit(&'a ContentNode),
    /// Replace the last `n` rendered pieces with their space-joined text.
    Join(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(v: serde_json::Value) -> ContentNode {
        ContentNode::from(v)
    }

    #[test]
    fn absent_renders_empty() {
        assert_eq!(extract_text(&ContentNode::Absent), "");
        assert_eq!(extract_text(&node(json!(null))), "");
        assert_eq!(extract_text(&ContentNode::from(None::<&str>)), "");
    }

    #[test]
    fn leaf_passes_through() {
        assert_eq!(extract_text(&node(json!("hello"))), "hello");
    }

    #[test]
    fn value_short_circuits_children() {
        let n = node(json!({ "value": "x", "children": [{ "value": "y" }] }));
        assert_eq!(extract_text(&n), "x");
    }

    #[test]
    fn empty_value_falls_through_to_children() {
        let n = node(json!({ "value": "", "children": [{ "value": "y" }] }));
        assert_eq!(extract_text(&n), "y");
    }

    #[test]
    fn children_are_space_joined_in_order() {
        let n = node(json!({ "children": [{ "value": "a" }, { "value": "b" }, { "value": "c" }] }));
        assert_eq!(extract_text(&n), "a b c");
    }

    #[test]
    fn empty_children_render_empty() {
        assert_eq!(extract_text(&node(json!({ "children": [] }))), "");
        assert_eq!(extract_text(&node(json!({}))), "");
    }

    #[test]
    fn nested_composites_flatten() {
        let n = node(json!({
            "children": [
                { "children": [{ "value": "a" }, { "value": "b" }] },
                { "value": "c" }
            ]
        }));
        assert_eq!(extract_text(&n), "a b c");
    }

    #[test]
    fn absent_children_still_contribute_separators() {
        let n = node(json!({ "children": [{ "value": "a" }, null, { "value": "b" }] }));
        assert_eq!(extract_text(&n), "a  b");
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut n = ContentNode::leaf("deep");
        for _ in 0..100_000 {
            n = ContentNode::parent(vec![n]);
        }
        assert_eq!(extract_text(&n), "deep");
    }
}
