//! Property-based tests for the compile pipeline
//!
//! Arbitrary text must never make a stage panic, and the token stream must stay well formed
//! no matter how broken the indentation is.

use proptest::prelude::*;
use proto_parser::proto::lexing::tokenize;
use proto_parser::proto::token::TokenKind;
use proto_parser::{compile, Severity};

/// Lines that look like proto, at random indentation
fn proto_line_strategy() -> impl Strategy<Value = String> {
    let content = prop_oneof![
        Just("screen Home:".to_string()),
        Just("modal Confirm:".to_string()),
        Just("# Title".to_string()),
        Just("> text".to_string()),
        Just("@[Go](Home)".to_string()),
        Just("- item".to_string()),
        Just("row-gap4:".to_string()),
        Just("$Card: a|b".to_string()),
        Just("nav:".to_string()),
        Just("---".to_string()),
        Just(String::new()),
        "[a-z ]{1,12}",
    ];
    (0usize..4, content).prop_map(|(depth, content)| format!("{}{}", "  ".repeat(depth), content))
}

fn proto_source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(proto_line_strategy(), 0..20).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_tokenizer_never_panics(source in "\\PC{0,200}") {
        let _ = tokenize(&source);
    }

    #[test]
    fn test_indents_balance_and_stream_ends_with_eof(source in proto_source_strategy()) {
        let tokens = tokenize(&source).tokens;
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        prop_assert_eq!(indents, dedents);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_compile_never_panics(source in proto_source_strategy()) {
        let result = compile(&source, None);
        prop_assert!(result.errors.iter().all(|e| e.severity != Severity::Fatal));
    }

    #[test]
    fn test_compile_arbitrary_text_never_panics(source in "\\PC{0,200}") {
        let _ = compile(&source, None);
    }

    #[test]
    fn test_diagnostics_are_sorted(source in proto_source_strategy()) {
        let result = compile(&source, None);
        let positions: Vec<(usize, usize)> =
            result.errors.iter().map(|e| (e.line, e.column)).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        prop_assert_eq!(positions, sorted);
    }
}
