//! Delimiter recognition
//!
//! Turns the raw character-class stream into parser tokens. A formatting
//! character (`*`, `_` or a backtick) only becomes a structural token when the
//! character right before it or right after it is a space, a line break or
//! another formatting character. Source start and end count too. Formatting
//! characters that fail the test are ordinary text, so identifiers such as
//! `snake_case_name` survive as a single text run.
//!
//! Spaces at a dispatch position are consumed without producing a token.
//! Spaces inside a text run are kept verbatim.

use crate::lexer::tokens::{RawToken, Token, TokenKind};
use std::ops::Range;

type RawSpan = (RawToken, Range<usize>);

/// Whether the raw token at `index` is a structural delimiter
pub fn is_recognised(raw: &[RawSpan], index: usize) -> bool {
    let Some((token, _)) = raw.get(index) else {
        return false;
    };
    if !token.is_formatting() {
        return false;
    }

    let prev = index
        .checked_sub(1)
        .and_then(|i| raw.get(i))
        .map(|(t, _)| t.is_boundary());
    let next = raw.get(index + 1).map(|(t, _)| t.is_boundary());

    prev.unwrap_or(true) || next.unwrap_or(true)
}

/// Index one past the end of the text run starting at `start`
fn text_run_end(raw: &[RawSpan], start: usize) -> usize {
    let mut end = start;
    while end < raw.len() && raw[end].0 != RawToken::Newline && !is_recognised(raw, end) {
        end += 1;
    }
    end
}

fn delimiter_kind(token: RawToken) -> Option<TokenKind> {
    match token {
        RawToken::Star => Some(TokenKind::Bold),
        RawToken::Underscore => Some(TokenKind::Italic),
        RawToken::Backtick => Some(TokenKind::Code),
        _ => None,
    }
}

/// Build parser tokens from the raw stream of `source`
pub fn recognise_delimiters(source: &str, raw: &[RawSpan]) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < raw.len() {
        let (token, span) = raw[cursor].clone();

        match token {
            RawToken::Hash => {
                tokens.push((Token::new(TokenKind::Heading, &source[span.clone()]), span));
                cursor += 1;
            }
            RawToken::Newline => {
                tokens.push((Token::new(TokenKind::Newline, &source[span.clone()]), span));
                cursor += 1;
            }
            RawToken::Space => {
                cursor += 1;
            }
            _ => match delimiter_kind(token).filter(|_| is_recognised(raw, cursor)) {
                Some(kind) => {
                    tokens.push((Token::new(kind, &source[span.clone()]), span));
                    cursor += 1;
                }
                None => {
                    // Never empty: the token at the cursor is neither a newline
                    // nor a recognised delimiter.
                    let end = text_run_end(raw, cursor);
                    let run = span.start..raw[end - 1].1.end;
                    tokens.push((Token::text(&source[run.clone()]), run));
                    cursor = end;
                }
            },
        }
    }

    tokens
}
