//! Token definitions for the marklet format
//!
//! Tokenization happens in two layers. [`RawToken`] is the character-class
//! layer produced by logos: every structural character gets its own token and
//! everything else is grouped into words. [`Token`] is what the parser sees,
//! after the delimiter rule has decided which formatting characters are
//! structural and text runs have been assembled.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character classes recognised by the scanner
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    #[token("#")]
    Hash,

    #[token("*")]
    Star,

    #[token("_")]
    Underscore,

    #[token("`")]
    Backtick,

    #[token("\n")]
    Newline,

    // One token per character so that adjacency checks stay character accurate.
    // Tabs are ordinary word characters.
    #[token(" ")]
    Space,

    // Anything that is not structural
    #[regex(r"[^#*_`\n ]+")]
    Word,
}

impl RawToken {
    /// Formatting characters are subject to the delimiter rule
    pub fn is_formatting(&self) -> bool {
        matches!(self, RawToken::Star | RawToken::Underscore | RawToken::Backtick)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, RawToken::Space | RawToken::Newline)
    }

    /// Whether this token, sitting next to a formatting character, makes that
    /// character a delimiter
    pub fn is_boundary(&self) -> bool {
        self.is_whitespace() || self.is_formatting()
    }
}

/// The kinds of token handed to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Heading,
    Bold,
    Italic,
    Code,
    Newline,
    Text,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Heading => "heading",
            TokenKind::Bold => "bold",
            TokenKind::Italic => "italic",
            TokenKind::Code => "code",
            TokenKind::Newline => "newline",
            TokenKind::Text => "text",
        }
    }
}

/// A typed token together with the source text it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn text(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, literal)
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text => write!(f, "<text:{}>", self.literal),
            kind => write!(f, "<{}>", kind.name()),
        }
    }
}
