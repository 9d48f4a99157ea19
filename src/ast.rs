//! Abstract syntax tree for marklet documents
//!
//! A [`Document`] is an ordered list of [`Node`]s. Source order is preserved
//! through every stage, and each tree is owned by the parse that built it.

pub mod node;

pub use node::{AstNode, Container, Document, Element, Node, UnknownElement};
