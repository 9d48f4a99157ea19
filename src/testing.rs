//! Testing utilities
//!
//! Parser and pipeline tests assert on tree structure through [`assert_ast`]
//! rather than poking at enum variants by hand:
//!
//! ```rust,ignore
//! let doc = parse_document("### Title");
//! assert_ast(&doc).item_count(1).item(0, |item| {
//!     item.assert_heading().level(3).text("Title");
//! });
//! ```

pub mod ast_assertions;

pub use ast_assertions::{assert_ast, ChildrenAssertion, DocumentAssertion, NodeAssertion};
