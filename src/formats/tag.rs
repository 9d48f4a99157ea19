//! XML-like AST tag serialization
//!
//! Serializes the tree to an indented tag format that mirrors the node
//! variants directly. Unlike the HTML emitter, text here is escaped so the
//! dump stays readable whatever the source contains.
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <heading level="2">
//!     <text>Intro to </text>
//!     <formatting element="i">
//!       <text>marklet</text>
//!     </formatting>
//!   </heading>
//! </document>
//! ```

use crate::ast::{Document, Node};

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for node in &doc.content {
        serialize_node(node, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_node(node: &Node, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match node {
        Node::Text { value } => {
            output.push_str(&format!("{}<text>{}</text>\n", indent, escape_xml(value)));
        }
        Node::Heading { level, content } => {
            let open = format!("heading level=\"{}\"", level);
            serialize_container(&open, "heading", content, indent_level, output);
        }
        Node::Formatting { element, content } => {
            let open = format!("formatting element=\"{}\"", element.tag());
            serialize_container(&open, "formatting", content, indent_level, output);
        }
    }
}

fn serialize_container(
    open: &str,
    close: &str,
    children: &[Node],
    indent_level: usize,
    output: &mut String,
) {
    let indent = "  ".repeat(indent_level);

    if children.is_empty() {
        output.push_str(&format!("{}<{}></{}>\n", indent, open, close));
        return;
    }

    output.push_str(&format!("{}<{}>\n", indent, open));
    for child in children {
        serialize_node(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</{}>\n", indent, close));
}

/// Escape XML special characters; line breaks are shown as `\n`
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\n', "\\n")
}
