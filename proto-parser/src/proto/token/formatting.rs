//! Token formatting helpers
//!
//! This module converts token streams back to text. Two consumers use it:
//!
//! - diagnostics, which need a readable "expected one of ..." list
//! - debugging and round-trip tests, which reconstruct source lines from tokens
//!
//! Indent and Dedent tokens carry no text; the detokenizer turns them into a running
//! indentation depth so the output is re-parseable (although original spacing and comments
//! are not preserved).

use super::core::{Token, TokenKind};

/// Indentation unit used when rebuilding nested lines
const INDENT_UNIT: &str = "  ";

/// Describe a set of expected token kinds for error messages.
///
/// # Example
///
/// ```rust,ignore
/// describe_expected(&[TokenKind::Button]) == "button"
/// describe_expected(&[TokenKind::Button, TokenKind::Link]) == "button or link"
/// ```
pub fn describe_expected(expected: &[TokenKind]) -> String {
    let names: Vec<&str> = expected.iter().map(|kind| kind.describe()).collect();
    match names.as_slice() {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

/// Detokenize a stream of tokens into source text
pub fn detokenize(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    let mut at_line_start = true;

    for token in tokens {
        match token.kind {
            TokenKind::Indent => depth += 1,
            TokenKind::Dedent => depth = depth.saturating_sub(1),
            TokenKind::Eof => {}
            TokenKind::Newline => {
                out.push('\n');
                at_line_start = true;
            }
            _ => {
                if at_line_start {
                    out.push_str(&INDENT_UNIT.repeat(depth));
                    at_line_start = false;
                } else if needs_space(&out) {
                    out.push(' ');
                }
                out.push_str(&token.text);
            }
        }
    }

    out
}

fn needs_space(out: &str) -> bool {
    !matches!(out.chars().last(), Some(' ') | Some('\n') | None)
}
