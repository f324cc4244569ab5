use serde::Deserialize;
use serde_json::Value;

/// A node of a parsed content document.
///
/// The upstream parser makes no promises about which fields a node carries, so
/// every shape it can emit maps onto one of these variants. Conversion from
/// JSON never fails; anything unrecognised becomes [`ContentNode::Absent`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ContentNode {
    /// Missing node (`null`, or a shape that carries no text).
    #[default]
    Absent,
    /// A bare string leaf.
    Leaf(String),
    /// A structured node with optional direct text and optional children.
    Composite {
        value: Option<String>,
        children: Option<Vec<ContentNode>>,
    },
}

impl ContentNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Composite node carrying direct text and no children.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Composite { value: Some(value.into()), children: None }
    }

    /// Composite node with children and no direct text.
    pub fn parent(children: Vec<ContentNode>) -> Self {
        Self::Composite { value: None, children: Some(children) }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// Children are detached onto a flat list first; the derived drop would recurse
// once per nesting level.
impl Drop for ContentNode {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::Composite { children: Some(children), .. } => std::mem::take(children),
            _ => return,
        };
        while let Some(mut node) = pending.pop() {
            if let Self::Composite { children: Some(children), .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

impl From<Value> for ContentNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Leaf(s),
            Value::Object(mut map) => {
                let value = map.remove("value").and_then(scalar_text);
                let children = match map.remove("children") {
                    Some(Value::Array(items)) => {
                        Some(items.into_iter().map(ContentNode::from).collect())
                    }
                    _ => None,
                };
                Self::Composite { value, children }
            }
            // Bare numbers, booleans and arrays have neither `value` nor `children`.
            _ => Self::Absent,
        }
    }
}

impl From<&str> for ContentNode {
    fn from(s: &str) -> Self {
        Self::Leaf(s.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(s: String) -> Self {
        Self::Leaf(s)
    }
}

impl<T: Into<ContentNode>> From<Option<T>> for ContentNode {
    fn from(node: Option<T>) -> Self {
        node.map_or(Self::Absent, Into::into)
    }
}

/// Textual form of a truthy scalar `value` field.
///
/// Falsy scalars (`0`, `false`, `""`) yield `None`, so the node falls through
/// to its children. Floats print in shortest form, so `1.0` renders as `"1"`
/// and `1.5` as `"1.5"`.
///
/// Objects and arrays also yield `None` even though they are truthy: they have
/// no text of their own, so such a node is rendered from its children instead
/// of short-circuiting on an unprintable value.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => None,
            Some(f) if n.is_f64() => Some(f.to_string()),
            Some(_) => Some(n.to_string()),
            None => None,
        },
        _ => None,
    }
}
