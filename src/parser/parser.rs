//! Recursive-descent parser over the token stream
//!
//! All helpers share one cursor. Each helper consumes zero or more tokens and
//! hands back a node, or nothing when the dispatched token produces no node
//! (a newline at the top level). The parser never fails: unterminated
//! constructs close at the end of the line or the end of input.
//!
//! Termination rules per construct:
//!
//! - heading: closes at a newline (consumed) or end of input
//! - bold, italic, inline code: close at the matching marker or a newline
//!   (both consumed) or end of input
//! - fenced code: closes at three consecutive code markers (consumed) or end of
//!   input; the tokens in between are taken literally

use crate::ast::{Document, Element, Node};
use crate::lexer::{Token, TokenKind};

const FENCE_LENGTH: usize = 3;

pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Current cursor position, in tokens
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Parse every remaining token into a document
    pub fn parse_document(mut self) -> Document {
        let mut document = Document::new();
        while !self.is_at_end() {
            if let Some(node) = self.parse_next() {
                document.push(node);
            }
        }
        document
    }

    /// Consume the next token and build the node it opens.
    ///
    /// Always consumes at least one token when input remains.
    pub fn parse_next(&mut self) -> Option<Node> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::Heading => Some(self.parse_heading()),
            TokenKind::Text => Some(Node::text(token.literal.as_str())),
            TokenKind::Bold => Some(self.parse_formatting(TokenKind::Bold, Element::Strong)),
            TokenKind::Italic => Some(self.parse_formatting(TokenKind::Italic, Element::Italic)),
            TokenKind::Code => Some(self.parse_code()),
            TokenKind::Newline => None,
        }
    }

    // ------------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------------

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.cursor + offset)
    }

    fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.peek(offset).map(|token| token.kind)
    }

    /// Whether the next `count` tokens are all of `kind`
    fn matches_run(&self, kind: TokenKind, count: usize) -> bool {
        (0..count).all(|offset| self.peek_kind(offset) == Some(kind))
    }

    /// Number of consecutive `kind` tokens starting at the cursor
    fn run_length(&self, kind: TokenKind) -> usize {
        self.tokens[self.cursor..]
            .iter()
            .take_while(|token| token.kind == kind)
            .count()
    }

    fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    // ------------------------------------------------------------------------
    // Constructs
    // ------------------------------------------------------------------------

    /// Called with the first heading marker already consumed
    fn parse_heading(&mut self) -> Node {
        let mut level = 1;
        while self.peek_kind(0) == Some(TokenKind::Heading) {
            level += 1;
            self.advance();
        }

        let mut content = Vec::new();
        while let Some(kind) = self.peek_kind(0) {
            if kind == TokenKind::Newline {
                self.advance();
                break;
            }
            if let Some(node) = self.parse_next() {
                content.push(node);
            }
        }

        Node::heading(level, content)
    }

    /// Called with the opening marker already consumed
    fn parse_formatting(&mut self, marker: TokenKind, element: Element) -> Node {
        let mut content = Vec::new();
        while let Some(kind) = self.peek_kind(0) {
            if kind == marker || kind == TokenKind::Newline {
                self.advance();
                break;
            }
            if let Some(node) = self.parse_next() {
                content.push(node);
            }
        }

        Node::formatting(element, content)
    }

    /// Called with the first code marker already consumed
    fn parse_code(&mut self) -> Node {
        if !self.matches_run(TokenKind::Code, FENCE_LENGTH - 1) {
            return self.parse_formatting(TokenKind::Code, Element::Code);
        }
        self.skip(FENCE_LENGTH - 1);

        let mut content = Vec::new();
        while !self.is_at_end() {
            let run = self.run_length(TokenKind::Code);
            if run == FENCE_LENGTH {
                self.skip(FENCE_LENGTH);
                break;
            }
            // Backtick runs of any other length are content. A newline token's
            // literal is the line break itself.
            for _ in 0..run.max(1) {
                if let Some(token) = self.peek(0) {
                    content.push(Node::text(token.literal.as_str()));
                }
                self.advance();
            }
        }

        Node::formatting(Element::Code, content)
    }
}

/// Parse a token stream into a document
pub fn parse(tokens: &[Token]) -> Document {
    Parser::new(tokens).parse_document()
}
