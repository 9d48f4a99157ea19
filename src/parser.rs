//! Parser module for the marklet format
//!
//! This module builds a [`Document`] out of the token stream produced by the
//! [lexer](crate::lexer).
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions in [`testing`](crate::testing).

#[allow(clippy::module_inception)]
pub mod parser;
#[cfg(test)]
mod tests;

pub use crate::ast::{Document, Element, Node};
pub use parser::{parse, Parser};

/// Main parser function that takes source text and returns a parsed document
pub fn parse_document(source: &str) -> Document {
    let tokens = crate::lexer::tokenize(source);
    parse(&tokens)
}
