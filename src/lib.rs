//! # marklet
//!
//! A transpiler for a small line-oriented markup dialect. Source text goes
//! through three stages, each a total function of its input:
//!
//! 1. [`lexer`]: text to typed tokens
//! 2. [`parser`]: tokens to a [`Document`] tree
//! 3. [`emitter`]: tree to an HTML fragment
//!
//! The dialect covers headings (`#`), bold (`*`), italic (`_`), inline code
//! (one backtick) and fenced code (three backticks). Malformed input never
//! fails; unterminated spans close at the end of the line or of the input.
//!
//! Text is emitted without escaping. Hosts rendering untrusted input must
//! sanitize the returned fragment.
//!
//! ## Testing
//!
//! Tree assertions live in the [testing module](testing).

pub mod ast;
pub mod config;
pub mod emitter;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod processor;
pub mod testing;

pub use ast::{Document, Element, Node};
pub use emitter::emit;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::parse;
pub use pipeline::{to_html, Pipeline, Trace};
