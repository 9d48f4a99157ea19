//! Lexer module for the marklet format
//!
//! This module contains the tokenization logic: token definitions, the logos
//! character-class scanner and the delimiter pass that assembles text runs.
//!
//! Tokenization is total. Every input string produces a token stream, and any
//! character without a structural meaning ends up inside a text token.

pub mod delimiters;
pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{scan_raw, tokenize, tokenize_with_spans};
pub use tokens::{RawToken, Token, TokenKind};
