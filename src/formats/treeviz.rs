//! Treeviz formatter for AST nodes

use crate::ast::{AstNode, Container, Document, Node};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_width(doc, DEFAULT_LABEL_WIDTH)
}

/// Render the tree, truncating labels to `label_width` characters
pub fn to_treeviz_str_with_width(doc: &Document, label_width: usize) -> String {
    let mut result = String::new();
    append_children(&mut result, doc.children(), "", label_width);
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool, width: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = node.display_label().replace('\n', "\\n");

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&label, width)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix, width);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str, width: usize) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last, width);
    }
}
