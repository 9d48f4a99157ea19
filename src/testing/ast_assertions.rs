//! Fluent assertion API for AST nodes

use crate::ast::{AstNode, Container, Document, Element, Node};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_items(items: &[Node]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level items in the document
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.content.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(&self.doc.content)
        );
        self
    }

    /// Assert on a specific item by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.content.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.content.len()
        );

        assertion(NodeAssertion {
            node: &self.doc.content[index],
            context: format!("items[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_heading(self) -> ChildrenAssertion<'a> {
        match self.node {
            Node::Heading { .. } => ChildrenAssertion {
                node: self.node,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Heading, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_formatting(self, expected: Element) -> ChildrenAssertion<'a> {
        match self.node {
            Node::Formatting { element, .. } => {
                assert_eq!(
                    *element, expected,
                    "{}: Expected <{}>, found <{}>",
                    self.context, expected, element
                );
                ChildrenAssertion {
                    node: self.node,
                    context: self.context,
                }
            }
            other => panic!(
                "{}: Expected Formatting, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_text(self, expected: &str) {
        match self.node {
            Node::Text { value } => assert_eq!(
                value, expected,
                "{}: Expected text {:?}, found {:?}",
                self.context, expected, value
            ),
            other => panic!(
                "{}: Expected Text, found {}",
                self.context,
                other.node_type()
            ),
        }
    }
}

/// Assertions on a node with children (heading or formatting span)
pub struct ChildrenAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> ChildrenAssertion<'a> {
    pub fn level(self, expected: usize) -> Self {
        if let Node::Heading { level, .. } = self.node {
            assert_eq!(
                *level, expected,
                "{}: Expected heading level {}, found {}",
                self.context, expected, level
            );
        } else {
            panic!("{}: level() only applies to headings", self.context);
        }
        self
    }

    /// Assert the concatenated text of all descendants
    pub fn text(self, expected: &str) -> Self {
        let actual = self.node.plain_text();
        assert_eq!(
            actual, expected,
            "{}: Expected text {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.node.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize_items(children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );

        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}
