//! Base tokenization using the logos lexer
//!
//!     Runs the logos lexer over the full source and attaches a [`Range`] to every token. The
//!     logos lexer can't skip a single bad character and continue on its own, so on an error we
//!     record the first character of the failing slice and restart the lexer right after it.
//!
//!     Element tokens run to the end of their line, which would swallow trailing comments
//!     (`> text // note`). A `//` preceded by whitespace ends the token; the comment itself is
//!     discarded like a full-line comment. `https://` stays intact because no whitespace
//!     precedes the slashes.

use crate::proto::ast::range::SourceLocation;
use crate::proto::lexing::common::LexError;
use crate::proto::token::{Token, TokenKind};
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+//").unwrap());

/// Tokenize source into raw tokens (whitespace included) and lexical errors.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let locations = SourceLocation::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0;

    while offset < source.len() {
        let rest = &source[offset..];
        let mut lexer = TokenKind::lexer(rest);
        let mut restart_at = None;

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let start = offset + span.start;
            match result {
                Ok(kind) => {
                    let end = start + kept_len(kind, lexer.slice());
                    let range = locations.byte_range_to_ast_range(&(start..end));
                    tokens.push(Token::new(kind, &source[start..end], range));
                }
                Err(()) => {
                    let character = rest[span.start..].chars().next().unwrap_or('\u{FFFD}');
                    let end = start + character.len_utf8();
                    errors.push(LexError::UnexpectedCharacter {
                        character,
                        range: locations.byte_range_to_ast_range(&(start..end)),
                    });
                    if end < offset + span.end {
                        restart_at = Some(end);
                        break;
                    }
                }
            }
        }

        match restart_at {
            Some(next) => offset = next,
            None => break,
        }
    }

    (tokens, errors)
}

/// Length of the token once a trailing comment is cut off
fn kept_len(kind: TokenKind, slice: &str) -> usize {
    if !runs_to_end_of_line(kind) {
        return slice.len();
    }
    match TRAILING_COMMENT.find(slice) {
        Some(found) => found.start(),
        None => slice.len(),
    }
}

fn runs_to_end_of_line(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Heading
            | TokenKind::Paragraph
            | TokenKind::MutedText
            | TokenKind::QuoteText
            | TokenKind::Checkbox
            | TokenKind::Radio
            | TokenKind::ListItem
            | TokenKind::ComponentRef
            | TokenKind::CssDeclaration
    )
}
