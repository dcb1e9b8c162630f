//! Error types for AST building

use crate::proto::ast::range::Range;
use crate::proto::diagnostics::{ProtoError, Severity, Stage};
use crate::proto::parsing::Rule;
use std::fmt;

/// Errors found while building the AST. All of them are per node except `Internal`.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Token text that doesn't have the shape its rule requires; the node is omitted
    MalformedElement {
        rule: Rule,
        text: String,
        range: Range,
    },
    /// A second declaration with a name already used in the same category; it is dropped
    DuplicateName {
        category: &'static str,
        name: String,
        first: Range,
        range: Range,
    },
    /// A second screen flagged `(default)`; the first one stays the default
    MultipleDefaults {
        name: String,
        first: String,
        range: Range,
    },
    /// A layout modifier outside the known vocabulary (strict mode only)
    UnknownModifier { modifier: String, range: Range },
    /// The builder itself failed; the document was replaced by an empty one
    Internal { message: String, range: Range },
}

impl BuildError {
    pub fn range(&self) -> &Range {
        match self {
            BuildError::MalformedElement { range, .. }
            | BuildError::DuplicateName { range, .. }
            | BuildError::MultipleDefaults { range, .. }
            | BuildError::UnknownModifier { range, .. }
            | BuildError::Internal { range, .. } => range,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BuildError::MalformedElement { .. } => "malformed-element",
            BuildError::DuplicateName { .. } => "duplicate-name",
            BuildError::MultipleDefaults { .. } => "multiple-defaults",
            BuildError::UnknownModifier { .. } => "unknown-modifier",
            BuildError::Internal { .. } => "internal-error",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BuildError::UnknownModifier { .. } => Severity::Warning,
            BuildError::Internal { .. } => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedElement { rule, text, .. } => {
                write!(f, "Malformed {}: {:?}", rule, text)
            }
            BuildError::DuplicateName {
                category,
                name,
                first,
                ..
            } => write!(
                f,
                "Duplicate {} name '{}' (first declared on line {})",
                category,
                name,
                first.start.line + 1
            ),
            BuildError::MultipleDefaults { name, first, .. } => write!(
                f,
                "Screen '{}' is marked as default, but '{}' already is",
                name, first
            ),
            BuildError::UnknownModifier { modifier, .. } => {
                write!(f, "Unknown layout modifier '{}'", modifier)
            }
            BuildError::Internal { message, .. } => {
                write!(f, "Internal builder error: {}", message)
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<&BuildError> for ProtoError {
    fn from(error: &BuildError) -> Self {
        let proto =
            ProtoError::at_range(Stage::Builder, error.code(), error.to_string(), error.range())
                .with_severity(error.severity());
        match error {
            BuildError::UnknownModifier { modifier, .. } => proto.with_unexpected(modifier.clone()),
            BuildError::MalformedElement { text, .. } => proto.with_unexpected(text.clone()),
            _ => proto,
        }
    }
}
