//! Implementation of the marklet lexer
//!
//! The character-class scan is handled entirely by logos. The delimiter pass in
//! [`delimiters`](super::delimiters) turns the raw stream into parser tokens.

use crate::lexer::delimiters::recognise_delimiters;
use crate::lexer::tokens::{RawToken, Token};
use logos::Logos;
use std::ops::Range;

/// Scan the source into raw character-class tokens with their byte spans.
///
/// Every byte of the source is covered by exactly one raw token.
pub fn scan_raw(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // The word class covers every non-structural character, so errors only
        // surface for input logos cannot classify; keep it as text.
        let token = result.unwrap_or(RawToken::Word);
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Tokenize a string into parser tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and keep the byte span each token was read from
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    recognise_delimiters(source, &scan_raw(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokens::TokenKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_plain_text_is_one_run() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens, vec![Token::text("hello world")]);
    }

    #[test]
    fn test_heading_markers() {
        let tokens = tokenize("### Title");
        assert_eq!(
            kinds("### Title"),
            vec![
                TokenKind::Heading,
                TokenKind::Heading,
                TokenKind::Heading,
                TokenKind::Text
            ]
        );
        assert_eq!(tokens[3].literal, "Title");
    }

    #[test]
    fn test_bold_span() {
        let tokens = tokenize("*bold*");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Bold, "*"),
                Token::text("bold"),
                Token::new(TokenKind::Bold, "*"),
            ]
        );
    }

    #[test]
    fn test_text_before_emphasis_keeps_trailing_space() {
        let tokens = tokenize("hello *world*");
        assert_eq!(tokens[0], Token::text("hello "));
        assert_eq!(tokens[1].kind, TokenKind::Bold);
        assert_eq!(tokens[2], Token::text("world"));
        assert_eq!(tokens[3].kind, TokenKind::Bold);
    }

    #[test]
    fn test_in_word_underscores_are_text() {
        assert_eq!(tokenize("it's_not_italic"), vec![Token::text("it's_not_italic")]);
    }

    #[test]
    fn test_mid_run_hash_is_text() {
        assert_eq!(tokenize("C# rocks"), vec![Token::text("C# rocks")]);
    }

    #[test]
    fn test_newlines_split_runs() {
        assert_eq!(
            kinds("one\ntwo"),
            vec![TokenKind::Text, TokenKind::Newline, TokenKind::Text]
        );
    }

    #[test]
    fn test_leading_spaces_are_skipped() {
        assert_eq!(tokenize("   text"), vec![Token::text("text")]);
    }

    #[test]
    fn test_fence_markers() {
        assert_eq!(
            kinds("```"),
            vec![TokenKind::Code, TokenKind::Code, TokenKind::Code]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize("   "), vec![]);
    }

    #[test]
    fn test_leading_tab_is_text() {
        assert_eq!(tokenize("\tx"), vec![Token::text("\tx")]);
    }

    #[test]
    fn test_underscore_after_tab_stays_in_word() {
        assert_eq!(
            tokenize("a\t_b_"),
            vec![
                Token::text("a\t_b"),
                Token::new(TokenKind::Italic, "_"),
            ]
        );
    }

    #[test]
    fn test_spans_cover_literals() {
        let source = "# *hi* there";
        for (token, span) in tokenize_with_spans(source) {
            assert_eq!(&source[span], token.literal);
        }
    }

    #[test]
    fn test_raw_scan_covers_every_byte() {
        let source = "a_b *c*\n`d` é";
        let raw = scan_raw(source);
        let mut expected_start = 0;
        for (_, span) in &raw {
            assert_eq!(span.start, expected_start);
            expected_start = span.end;
        }
        assert_eq!(expected_start, source.len());
    }
}
