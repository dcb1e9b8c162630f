//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for proto sources. Lexing runs in two
//!     passes, each receiving a token list and returning a token list:
//!
//!         1. Core tokenization using the logos lexer. See [base_tokenization](base_tokenization).
//!            Produces element tokens, newlines and whitespace runs. Characters no pattern
//!            matches are recorded as errors and skipped one at a time.
//!
//!         2. Semantic indentation. See
//!            [semantic_indentation](transformations::semantic_indentation).
//!            Leading whitespace runs become Indent / Dedent tokens, every other whitespace run
//!            is dropped, and the stream is closed with a final Newline and Eof.
//!
//!     At this point lexing is complete: the parser receives a flat list of line tokens,
//!     newlines and indentation events.
//!
//! Indentation Handling
//!
//!     Nesting in proto is expressed by indentation only (`screen Home:` followed by indented
//!     elements). Like in any offside-rule language, indentation is mapped to indent and dedent
//!     tokens, which then play the role open and close braces play in c-style syntaxes. Unlike
//!     a fixed 4-space unit, any deeper column opens a level; the mapper keeps the stack of
//!     open columns and a dedent must land on one of them.
//!
//! Never Failing
//!
//!     Lexing never returns an error for malformed input. The [`LexerOutput`] always carries
//!     the tokens that could be produced, plus every error found on the way.

pub mod base_tokenization;
pub mod common;
pub mod transformations;

pub use common::{LexError, LexerOutput};

use transformations::semantic_indentation::SemanticIndentationMapper;

/// Default width of a tab character when measuring indentation
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Tokenize source text with the default tab width.
pub fn tokenize(source: &str) -> LexerOutput {
    tokenize_with(source, DEFAULT_TAB_WIDTH)
}

/// Tokenize source text, measuring tabs as `tab_width` columns.
pub fn tokenize_with(source: &str, tab_width: usize) -> LexerOutput {
    let (raw, mut errors) = base_tokenization::tokenize(source);
    let mut mapper = SemanticIndentationMapper::new(tab_width);
    let (tokens, indentation_errors) = mapper.map(raw, source);
    errors.extend(indentation_errors);
    errors.sort_by_key(|error| error.range().span.start);

    log::debug!(
        "lexed {} tokens with {} errors",
        tokens.len(),
        errors.len()
    );

    LexerOutput { tokens, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::token::TokenKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_screen_with_children() {
        use TokenKind::*;
        assert_eq!(
            kinds("screen Home:\n  # Welcome\n  @[Go](Settings)\n"),
            vec![
                ScreenDecl, Newline, Indent, Heading, Newline, Button, Newline, Dedent, Eof
            ]
        );
    }

    #[test]
    fn test_missing_final_newline_is_added() {
        use TokenKind::*;
        assert_eq!(
            kinds("screen Home:\n  # Welcome"),
            vec![ScreenDecl, Newline, Indent, Heading, Newline, Dedent, Eof]
        );
    }

    #[test]
    fn test_blank_lines_keep_level() {
        use TokenKind::*;
        assert_eq!(
            kinds("screen A:\n  > one\n\n  > two\n"),
            vec![
                ScreenDecl, Newline, Indent, Paragraph, Newline, Newline, Paragraph, Newline,
                Dedent, Eof
            ]
        );
    }

    #[test]
    fn test_nested_dedent_closes_every_level() {
        use TokenKind::*;
        assert_eq!(
            kinds("screen A:\n  row:\n    > deep\nscreen B:\n"),
            vec![
                ScreenDecl, Newline, Indent, Layout, Newline, Indent, Paragraph, Newline, Dedent,
                Dedent, ScreenDecl, Newline, Eof
            ]
        );
    }

    #[test]
    fn test_unknown_character_keeps_scanning() {
        let output = tokenize("screen A:\n  > ok\n  % \n  > after\n");
        assert_eq!(output.errors.len(), 1);
        assert!(matches!(
            output.errors[0],
            LexError::UnexpectedCharacter { character: '%', .. }
        ));
        let paragraphs = output
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Paragraph)
            .count();
        assert_eq!(paragraphs, 2);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert!(tokenize("").errors.is_empty());
    }

    #[test]
    fn test_tab_width_is_configurable() {
        // One tab at width 2 matches the two-space level
        let source = "screen A:\n\t> tab\n  > spaces\n";
        assert!(tokenize_with(source, 2).errors.is_empty());
        assert!(!tokenize_with(source, 4).errors.is_empty());
    }
}
