//! Common lexer module
//!
//! This module contains the lexer output and error types shared by the lexing passes.

use crate::proto::ast::range::Range;
use crate::proto::diagnostics::{ProtoError, Stage};
use crate::proto::token::Token;
use std::fmt;

/// Output from the lexer: the tokens that could be produced and the errors met on the way
#[derive(Debug, Clone, Default)]
pub struct LexerOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexerOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Errors that can occur during lexing. None of them stops the scan.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// No token pattern matches at this character
    UnexpectedCharacter { character: char, range: Range },
    /// A dedent landed on a column that matches no open indentation level
    InconsistentDedent {
        column: usize,
        open_columns: Vec<usize>,
        range: Range,
    },
}

impl LexError {
    pub fn range(&self) -> &Range {
        match self {
            LexError::UnexpectedCharacter { range, .. } => range,
            LexError::InconsistentDedent { range, .. } => range,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "unexpected-character",
            LexError::InconsistentDedent { .. } => "inconsistent-dedent",
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { character, .. } => {
                write!(f, "Unexpected character {:?}", character)
            }
            LexError::InconsistentDedent {
                column,
                open_columns,
                ..
            } => {
                let columns: Vec<String> = open_columns.iter().map(|c| c.to_string()).collect();
                write!(
                    f,
                    "Indentation of {} columns matches no enclosing block (open levels: {})",
                    column,
                    columns.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

impl From<&LexError> for ProtoError {
    fn from(error: &LexError) -> Self {
        let proto = ProtoError::at_range(Stage::Lexer, error.code(), error.to_string(), error.range());
        match error {
            LexError::UnexpectedCharacter { character, .. } => {
                proto.with_unexpected(character.to_string())
            }
            LexError::InconsistentDedent { .. } => proto,
        }
    }
}
