use crate::ast::{Element, Node};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::parser::{parse, parse_document, Parser};
use crate::testing::assert_ast;

#[test]
fn test_plain_text() {
    let doc = parse_document("hello world");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_text("hello world");
    });
}

#[test]
fn test_heading_level_counts_markers() {
    let doc = parse_document("### Title");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_heading()
            .level(3)
            .child_count(1)
            .child(0, |child| child.assert_text("Title"));
    });
}

#[test]
fn test_heading_stops_at_newline() {
    let doc = parse_document("# One\nbody");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_heading().level(1).text("One").child_count(1);
        })
        .item(1, |item| item.assert_text("body"));
}

#[test]
fn test_heading_with_inline_formatting() {
    let doc = parse_document("## A *bold* move");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_heading()
            .level(2)
            .child_count(3)
            .child(0, |c| c.assert_text("A "))
            .child(1, |c| {
                c.assert_formatting(Element::Strong).text("bold");
            })
            .child(2, |c| c.assert_text("move"));
    });
}

#[test]
fn test_bold_closes_on_matching_marker() {
    let doc = parse_document("*bold* after");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_formatting(Element::Strong).text("bold");
        })
        .item(1, |item| item.assert_text("after"));
}

#[test]
fn test_unterminated_bold_closes_at_end_of_input() {
    let doc = parse_document("*bold");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Strong)
            .child_count(1)
            .child(0, |c| c.assert_text("bold"));
    });
}

#[test]
fn test_emphasis_is_single_line() {
    let doc = parse_document("_open\nclose_");
    assert_ast(&doc)
        .item_count(3)
        .item(0, |item| {
            item.assert_formatting(Element::Italic).text("open");
        })
        .item(1, |item| item.assert_text("close"))
        .item(2, |item| {
            item.assert_formatting(Element::Italic).child_count(0);
        });
}

#[test]
fn test_nested_emphasis() {
    let doc = parse_document("*_both_*");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Strong)
            .child_count(1)
            .child(0, |c| {
                c.assert_formatting(Element::Italic).text("both");
            });
    });
}

#[test]
fn test_inline_code() {
    let doc = parse_document("`let x`");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Code).text("let x");
    });
}

#[test]
fn test_inline_code_parses_nested_formatting() {
    let doc = parse_document("`a *b*`");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Code)
            .child_count(2)
            .child(1, |c| {
                c.assert_formatting(Element::Strong).text("b");
            });
    });
}

#[test]
fn test_fenced_code_is_literal() {
    let doc = parse_document("```\n*not bold*\n```");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Code)
            .text("\n*not bold*\n")
            .child_count(5)
            .child(0, |c| c.assert_text("\n"))
            .child(1, |c| c.assert_text("*"))
            .child(2, |c| c.assert_text("not bold"))
            .child(3, |c| c.assert_text("*"))
            .child(4, |c| c.assert_text("\n"));
    });
}

#[test]
fn test_unterminated_fence_runs_to_end() {
    let doc = parse_document("```\ncode\n# not a heading");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Code)
            .text("\ncode\n#not a heading");
    });
}

#[test]
fn test_content_after_fence() {
    let doc = parse_document("```x```\ntail");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_formatting(Element::Code).text("x");
        })
        .item(1, |item| item.assert_text("tail"));
}

#[test]
fn test_longer_backtick_run_does_not_close_fence() {
    let doc = parse_document("```a````");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_formatting(Element::Code)
            .text("a````")
            .child_count(5);
    });
}

#[test]
fn test_fence_closes_after_longer_run() {
    let doc = parse_document("```a```` b```\ntail");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_formatting(Element::Code).text("a````b");
        })
        .item(1, |item| item.assert_text("tail"));
}

#[test]
fn test_two_markers_are_inline_code() {
    let doc = parse_document("``x");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_formatting(Element::Code).child_count(0);
        })
        .item(1, |item| item.assert_text("x"));
}

#[test]
fn test_top_level_newlines_produce_no_nodes() {
    let doc = parse_document("\n\na\n\n");
    assert_ast(&doc)
        .item_count(1)
        .item(0, |item| item.assert_text("a"));
}

#[test]
fn test_empty_token_stream() {
    assert!(parse(&[]).is_empty());
}

#[test]
fn test_parse_from_hand_built_tokens() {
    let tokens = vec![
        Token::new(TokenKind::Heading, "#"),
        Token::new(TokenKind::Heading, "#"),
        Token::text("Hi"),
    ];
    let doc = parse(&tokens);
    assert_eq!(doc.content, vec![Node::heading(2, vec![Node::text("Hi")])]);
}

#[test]
fn test_parse_next_always_advances() {
    let tokens = tokenize("# a *b\n_c_ ```d");
    let mut parser = Parser::new(&tokens);
    while !parser.is_at_end() {
        let before = parser.cursor();
        parser.parse_next();
        assert!(parser.cursor() > before);
        assert!(parser.cursor() <= tokens.len());
    }
    assert!(parser.parse_next().is_none());
}
