//! Property-based tests for the parse and emit stages

use marklet::parser::Parser;
use marklet::{emit, parse, to_html, tokenize, Node};
use proptest::prelude::*;

fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("#".to_string()),
            Just("*".to_string()),
            Just("_".to_string()),
            Just("`".to_string()),
            Just("```".to_string()),
            Just("\n".to_string()),
            Just(" ".to_string()),
            "[a-z']{1,6}",
        ],
        0..48,
    )
    .prop_map(|parts| parts.concat())
}

fn count_tags(html: &str, tag: &str) -> (usize, usize) {
    (
        html.matches(&format!("<{}>", tag)).count(),
        html.matches(&format!("</{}>", tag)).count(),
    )
}

fn max_heading_level(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Heading { level, content } => (*level).max(max_heading_level(content)),
            Node::Formatting { content, .. } => max_heading_level(content),
            Node::Text { .. } => 0,
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn test_parser_cursor_strictly_advances(input in markup_strategy()) {
        let tokens = tokenize(&input);
        let mut parser = Parser::new(&tokens);
        while !parser.is_at_end() {
            let before = parser.cursor();
            parser.parse_next();
            prop_assert!(parser.cursor() > before);
            prop_assert!(parser.cursor() <= tokens.len());
        }
    }

    #[test]
    fn test_emission_is_idempotent(input in markup_strategy()) {
        let doc = parse(&tokenize(&input));
        prop_assert_eq!(emit(&doc), emit(&doc));
    }

    #[test]
    fn test_pipeline_is_deterministic(input in markup_strategy()) {
        prop_assert_eq!(to_html(&input), to_html(&input));
    }

    #[test]
    fn test_output_tags_are_balanced(input in markup_strategy()) {
        let doc = parse(&tokenize(&input));
        let html = emit(&doc);
        for tag in ["strong", "i", "code"] {
            let (open, close) = count_tags(&html, tag);
            prop_assert_eq!(open, close, "unbalanced <{}> in {:?}", tag, html);
        }
        for level in 1..=max_heading_level(&doc.content) {
            let (open, close) = count_tags(&html, &format!("h{}", level));
            prop_assert_eq!(open, close);
        }
    }

    #[test]
    fn test_plain_text_round_trips(input in "[a-zA-Z0-9][a-zA-Z0-9 ,.!?]{0,40}") {
        prop_assert_eq!(to_html(&input), input);
    }

    #[test]
    fn test_plain_lines_lose_only_newlines(
        lines in prop::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}", 1..6)
    ) {
        let source = lines.join("\n");
        prop_assert_eq!(to_html(&source), lines.concat());
    }
}
