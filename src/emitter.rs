//! HTML emitter
//!
//! Walks a [`Document`] depth first, left to right, and produces an HTML
//! fragment. Emission is pure: the same tree always renders to the same string.
//!
//! Text is written verbatim. Nothing is escaped, so a host that renders
//! untrusted input into a live page has to sanitize the fragment itself.

use crate::ast::{Document, Node};

/// Render a document to an HTML fragment
pub fn emit(doc: &Document) -> String {
    let mut output = String::new();
    emit_nodes(&doc.content, &mut output);
    output
}

/// Render a single node to an HTML fragment
pub fn emit_node(node: &Node) -> String {
    let mut output = String::new();
    write_node(node, &mut output);
    output
}

fn emit_nodes(nodes: &[Node], output: &mut String) {
    for node in nodes {
        write_node(node, output);
    }
}

fn write_node(node: &Node, output: &mut String) {
    match node {
        Node::Heading { level, content } => {
            output.push_str(&format!("<h{}>", level));
            emit_nodes(content, output);
            output.push_str(&format!("</h{}>", level));
        }
        Node::Formatting { element, content } => {
            output.push_str(&format!("<{}>", element.tag()));
            emit_nodes(content, output);
            output.push_str(&format!("</{}>", element.tag()));
        }
        Node::Text { value } => output.push_str(value),
    }
}
