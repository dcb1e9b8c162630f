//! Error types for routing and rendering

use proto_parser::proto::ast::{Position, Range};
use proto_parser::{ProtoError, Severity, Stage};
use std::fmt;

/// Navigation requests the route manager refused. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownScreen(String),
    UnknownOverlay(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownScreen(name) => write!(f, "Unknown screen: {}", name),
            RouteError::UnknownOverlay(name) => write!(f, "Unknown modal or drawer: {}", name),
        }
    }
}

impl std::error::Error for RouteError {}

/// Problems found while rendering. None of them abort the document: the offending node is
/// replaced by an inline placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// An instance or templated list names a component that isn't defined
    MissingComponent { name: String, range: Range },
    /// Component instantiation nested deeper than the configured limit
    RecursionLimit {
        name: String,
        limit: usize,
        range: Range,
    },
    /// The requested current screen doesn't exist; the default screen was shown
    UnknownScreen { name: String },
}

impl RenderError {
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::MissingComponent { .. } => "missing-component",
            RenderError::RecursionLimit { .. } => "recursion-limit",
            RenderError::UnknownScreen { .. } => "unknown-screen",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RenderError::UnknownScreen { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingComponent { name, .. } => {
                write!(f, "Component '{}' is not defined", name)
            }
            RenderError::RecursionLimit { name, limit, .. } => write!(
                f,
                "Component '{}' nests deeper than {} levels",
                name, limit
            ),
            RenderError::UnknownScreen { name } => {
                write!(f, "Screen '{}' does not exist, showing the default", name)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<&RenderError> for ProtoError {
    fn from(error: &RenderError) -> Self {
        let diagnostic = match error {
            RenderError::MissingComponent { range, .. }
            | RenderError::RecursionLimit { range, .. } => {
                ProtoError::at_range(Stage::Render, error.code(), error.to_string(), range)
            }
            RenderError::UnknownScreen { .. } => ProtoError::new(
                Stage::Render,
                error.code(),
                error.to_string(),
                Position::default(),
            ),
        };
        diagnostic.with_severity(error.severity())
    }
}
