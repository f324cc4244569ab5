use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

use crate::content_ast::types::ContentNode;

/// A Markdown body converted to a content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownContent {
    pub tree: ContentNode,
    /// Plain text of the first heading, if the body has a non-empty one.
    pub first_heading: Option<String>,
}

impl ContentNode {
    /// Parse Markdown into a content tree.
    ///
    /// Literal-bearing nodes become composites with a `value`; adjacent text
    /// runs and soft/hard breaks are merged into one text node. A leading
    /// `---` frontmatter block is not part of the tree.
    pub fn from_markdown(input: &str) -> Self {
        parse_markdown(input).tree
    }
}

/// Parse Markdown into a content tree, also picking out its first heading.
pub fn parse_markdown(input: &str) -> MarkdownContent {
    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, input, &options);
    convert(root)
}

/// A container node whose children are still being converted.
struct Frame<'a> {
    next: Option<&'a AstNode<'a>>,
    children: Vec<ContentNode>,
    run: Option<String>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a AstNode<'a>) -> Self {
        Self { next: node.first_child(), children: Vec::new(), run: None }
    }

    fn flush_run(&mut self) {
        if let Some(text) = self.run.take() {
            self.children.push(ContentNode::text(text));
        }
    }

    fn finish(mut self) -> ContentNode {
        self.flush_run();
        ContentNode::parent(self.children)
    }
}

// Walks with an explicit stack of open containers; nesting depth in the
// Markdown never turns into call depth.
fn convert<'a>(root: &'a AstNode<'a>) -> MarkdownContent {
    let mut first_heading = None;
    if let Some(node) = literal_node(root) {
        return MarkdownContent { tree: node, first_heading };
    }

    let mut open = vec![Frame::new(root)];
    while let Some(frame) = open.last_mut() {
        let Some(child) = frame.next else {
            let done = open.pop().map(Frame::finish).unwrap_or_default();
            match open.last_mut() {
                Some(parent) => parent.children.push(done),
                None => return MarkdownContent { tree: done, first_heading },
            }
            continue;
        };
        frame.next = child.next_sibling();

        let piece = match &child.data.borrow().value {
            NodeValue::Text(text) => Some(text.to_string()),
            NodeValue::SoftBreak | NodeValue::LineBreak => Some(" ".to_string()),
            _ => None,
        };
        if let Some(piece) = piece {
            frame.run.get_or_insert_with(String::new).push_str(&piece);
            continue;
        }

        frame.flush_run();
        match literal_node(child) {
            Some(ContentNode::Absent) => {}
            Some(node) => frame.children.push(node),
            None => {
                if first_heading.is_none()
                    && matches!(child.data.borrow().value, NodeValue::Heading(_))
                {
                    first_heading = heading_text(child);
                }
                open.push(Frame::new(child));
            }
        }
    }

    MarkdownContent { tree: ContentNode::default(), first_heading }
}

/// Content node for a literal-bearing (or skipped) comrak node; `None` for
/// containers.
fn literal_node<'a>(node: &'a AstNode<'a>) -> Option<ContentNode> {
    let literal = match &node.data.borrow().value {
        NodeValue::FrontMatter(_) => return Some(ContentNode::Absent),
        NodeValue::Code(code) => code.literal.clone(),
        NodeValue::CodeBlock(block) => block.literal.trim_end().to_string(),
        NodeValue::HtmlInline(html) => html.clone(),
        NodeValue::HtmlBlock(block) => block.literal.trim_end().to_string(),
        NodeValue::Text(text) => text.to_string(),
        _ => return None,
    };
    Some(ContentNode::text(literal))
}

fn heading_text<'a>(node: &'a AstNode<'a>) -> Option<String> {
    let mut text = String::new();
    for child in node.descendants() {
        match &child.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // GFM extensions, matching what the site renderer accepts
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.front_matter_delimiter = Some("---".to_string());

    options.parse.smart = false;

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_ast::extract_text;

    #[test]
    fn paragraph_lines_join_into_one_run() {
        let tree = ContentNode::from_markdown("Hello\nworld\n");
        assert_eq!(
            tree,
            ContentNode::parent(vec![ContentNode::parent(vec![ContentNode::text(
                "Hello world"
            )])])
        );
    }

    #[test]
    fn blocks_are_space_separated() {
        let tree = ContentNode::from_markdown("# Title\n\nSome *bold* text.\n");
        assert_eq!(extract_text(&tree), "Title Some  bold  text.");
    }

    #[test]
    fn code_literals_are_values() {
        let tree = ContentNode::from_markdown("Run `hsite index` now.\n\n```sh\necho hi\n```\n");
        assert_eq!(extract_text(&tree), "Run  hsite index  now. echo hi");
    }

    #[test]
    fn frontmatter_is_skipped() {
        let tree = ContentNode::from_markdown("---\ntitle: T\n---\n\nBody\n");
        assert_eq!(extract_text(&tree), "Body");
    }

    #[test]
    fn empty_document_is_empty_composite() {
        let tree = ContentNode::from_markdown("");
        assert_eq!(tree, ContentNode::parent(vec![]));
        assert_eq!(extract_text(&tree), "");
    }

    #[test]
    fn first_heading_is_taken_from_the_tree() {
        let parsed = parse_markdown("intro\n\n## Setup `hsite`\n\n# Later\n");
        assert_eq!(parsed.first_heading.as_deref(), Some("Setup hsite"));
    }

    #[test]
    fn hash_lines_that_are_not_headings_are_ignored() {
        let parsed = parse_markdown("```sh\n# install the cli\n```\n\n#hashtag\n\n    # indented\n");
        assert_eq!(parsed.first_heading, None);
    }

    #[test]
    fn empty_heading_is_skipped() {
        let parsed = parse_markdown("#\n\n## Real\n");
        assert_eq!(parsed.first_heading.as_deref(), Some("Real"));
    }

    #[test]
    fn deeply_nested_blockquotes_convert() {
        let input = format!("{}x\n", "> ".repeat(20_000));
        // comrak's own parser needs a roomier stack than the test default
        let text = std::thread::Builder::new()
            .stack_size(8 * 1024 * 1024)
            .spawn(move || extract_text(&ContentNode::from_markdown(&input)))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(text, "x");
    }
}
