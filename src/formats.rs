//! Debug serializations of the tree
//!
//! Besides the HTML [emitter](crate::emitter), a document can be dumped as
//! indented tags or as a box-drawing tree. Both are inspection aids for the
//! command line and for tests.

pub mod tag;
pub mod treeviz;

pub use tag::serialize_document as serialize_ast_tag;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width};
