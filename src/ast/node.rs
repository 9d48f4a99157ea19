//! AST node type definitions and trait implementations
//!
//! The tree has three node variants. Bold, italic and code spans all share the
//! [`Node::Formatting`] variant and differ only in their [`Element`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// AST Traits
// ============================================================================

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// Trait for nodes that hold child nodes
pub trait Container: AstNode {
    fn children(&self) -> &[Node];
}

// ============================================================================
// AST Node Definitions
// ============================================================================

/// The output element of a formatting span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "i")]
    Italic,
    #[serde(rename = "code")]
    Code,
}

impl Element {
    pub const ALL: [Element; 3] = [Element::Strong, Element::Italic, Element::Code];

    /// The HTML tag name for this element
    pub fn tag(&self) -> &'static str {
        match self {
            Element::Strong => "strong",
            Element::Italic => "i",
            Element::Code => "code",
        }
    }

    /// Look up an element by tag name. Unknown tags are rejected.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.tag() == tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown element tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown formatting element: {0}")]
pub struct UnknownElement(pub String);

impl FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownElement(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Heading { level: usize, content: Vec<Node> },
    Formatting { element: Element, content: Vec<Node> },
    Text { value: String },
}

/// The ordered top-level nodes of one parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: Vec<Node>,
}

impl Node {
    pub fn heading(level: usize, content: Vec<Node>) -> Self {
        Node::Heading { level, content }
    }

    pub fn formatting(element: Element, content: Vec<Node>) -> Self {
        Node::Formatting { element, content }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Concatenated text of this node and all its descendants
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text { value } => value.clone(),
            Node::Heading { content, .. } | Node::Formatting { content, .. } => {
                content.iter().map(Node::plain_text).collect()
            }
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: Vec<Node>) -> Self {
        Self { content }
    }

    pub fn push(&mut self, node: Node) {
        self.content.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Heading { .. } => "Heading",
            Node::Formatting { .. } => "Formatting",
            Node::Text { .. } => "Text",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Heading { level, .. } => format!("h{}", level),
            Node::Formatting { element, .. } => element.tag().to_string(),
            Node::Text { value } => value.clone(),
        }
    }
}

impl Container for Node {
    fn children(&self) -> &[Node] {
        match self {
            Node::Heading { content, .. } | Node::Formatting { content, .. } => content.as_slice(),
            Node::Text { .. } => &[],
        }
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} items", self.content.len())
    }
}

impl Container for Document {
    fn children(&self) -> &[Node] {
        &self.content
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { value } => write!(f, "Text({:?})", value),
            _ => write!(
                f,
                "{}({}, {} children)",
                self.node_type(),
                self.display_label(),
                self.children().len()
            ),
        }
    }
}
