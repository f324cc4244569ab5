use helpsite_core::{ContentNode, extract_text};
use insta::assert_snapshot;
use serde_json::json;

fn from_json(v: serde_json::Value) -> ContentNode {
    serde_json::from_value(v).unwrap()
}

#[test]
fn null_and_missing_render_empty() {
    assert_eq!(extract_text(&from_json(json!(null))), "");
    assert_eq!(extract_text(&ContentNode::default()), "");
}

#[test]
fn raw_string_passthrough() {
    assert_eq!(extract_text(&from_json(json!("hello"))), "hello");
}

/// A node carrying both `value` and `children` renders only its value.
/// The children's text is intentionally lost.
#[test]
fn value_takes_precedence_over_children() {
    let node = from_json(json!({
        "value": "x",
        "children": [{ "value": "lost" }, "also lost"]
    }));
    assert_eq!(extract_text(&node), "x");
}

#[test]
fn children_join_with_single_space() {
    let node = from_json(json!({
        "children": [{ "value": "a" }, { "value": "b" }, { "value": "c" }]
    }));
    assert_eq!(extract_text(&node), "a b c");
}

#[test]
fn empty_children_render_empty() {
    assert_eq!(extract_text(&from_json(json!({ "children": [] }))), "");
}

#[test]
fn nested_tree_flattens_in_document_order() {
    let node = from_json(json!({
        "children": [
            { "children": [{ "value": "a" }, { "value": "b" }] },
            { "value": "c" }
        ]
    }));
    assert_eq!(extract_text(&node), "a b c");
}

#[test]
fn extraction_is_deterministic() {
    let node = from_json(json!({
        "children": [{ "children": ["x", { "value": "y" }] }, { "value": "z" }]
    }));
    let first = extract_text(&node);
    for _ in 0..10 {
        assert_eq!(extract_text(&node), first);
    }
}

#[test]
fn extraction_is_safe_across_threads() {
    let node = std::sync::Arc::new(from_json(json!({
        "children": [{ "value": "a" }, { "value": "b" }]
    })));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let node = std::sync::Arc::clone(&node);
            std::thread::spawn(move || extract_text(&node))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "a b");
    }
}

#[test]
fn minimark_style_document() {
    // Shape emitted by the site's content parser for a small page.
    let body = from_json(json!({
        "type": "root",
        "children": [
            { "type": "element", "tag": "h1", "props": { "id": "quick-start" },
              "children": [{ "type": "text", "value": "快速开始" }] },
            { "type": "element", "tag": "p",
              "children": [
                  { "type": "text", "value": "Open" },
                  { "type": "element", "tag": "code", "children": [{ "type": "text", "value": "hsite" }] },
                  { "type": "text", "value": "to begin." }
              ] }
        ]
    }));
    assert_snapshot!(extract_text(&body), @"快速开始 Open hsite to begin.");
}

#[test]
fn markdown_tree_extraction() {
    let md = "# 用户手册\n\n- 快速开始\n- 基础功能\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
    let tree = ContentNode::from_markdown(md);
    assert_snapshot!(extract_text(&tree), @"用户手册 快速开始 基础功能 a b 1 2");
}
