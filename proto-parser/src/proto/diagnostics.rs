//! Caller facing diagnostics
//!
//! Every pipeline stage has its own error enum (`LexError`, `ParseError`, `BuildError` and,
//! in proto-render, `RenderError`). Callers (editors, the playground, the CLI) don't care
//! about those types; they want one flat list of located messages. [`ProtoError`] is that
//! list item. Stage errors convert into it through `From`, and the conversion is the only
//! place where 0-based positions become the 1-based line and column editors expect.
//!
//! ## Codes
//!
//! Codes are stable, kebab-case identifiers (`unexpected-character`, `unexpected-token`,
//! `duplicate-name`, ...). Tools key on codes, messages are free to change.

use super::ast::range::{Position, Range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Lexer,
    Parser,
    Builder,
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexer => write!(f, "lexer"),
            Stage::Parser => write!(f, "parser"),
            Stage::Builder => write!(f, "builder"),
            Stage::Render => write!(f, "render"),
        }
    }
}

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// A located diagnostic, as handed to callers of `compile` and `render`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtoError {
    pub stage: Stage,
    pub severity: Severity,
    pub code: String,
    pub message: String,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unexpected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<String>>,
}

impl ProtoError {
    /// Create an error-severity diagnostic at a 0-based position.
    pub fn new(
        stage: Stage,
        code: impl Into<String>,
        message: impl Into<String>,
        position: Position,
    ) -> Self {
        let (line, column) = position.one_based();
        Self {
            stage,
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            line,
            column,
            length: None,
            unexpected: None,
            expected: None,
        }
    }

    /// Create a diagnostic spanning a source range.
    pub fn at_range(
        stage: Stage,
        code: impl Into<String>,
        message: impl Into<String>,
        range: &Range,
    ) -> Self {
        let error = Self::new(stage, code, message, range.start);
        if range.is_empty() {
            error
        } else {
            error.with_length(range.len())
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_unexpected(mut self, unexpected: impl Into<String>) -> Self {
        self.unexpected = Some(unexpected.into());
        self
    }

    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for ProtoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}/{}]: {}",
            self.line, self.column, self.severity, self.stage, self.code, self.message
        )
    }
}

impl std::error::Error for ProtoError {}

/// Sort diagnostics by position, keeping stage order stable for the same spot.
pub fn sort_diagnostics(errors: &mut [ProtoError]) {
    errors.sort_by_key(|error| (error.line, error.column));
}
