//! AST building
//!
//! This module turns the parse tree into the typed AST. It follows a layered architecture:
//!
//! 1. Data Extraction - pull literal values out of token text with fixed patterns
//!    (see `extraction`). No AST types at this layer.
//! 2. AST Creation - one builder function per grammar rule, dispatched by a `match` on the
//!    rule (see [ast_tree]). Layout modifiers are parsed in [modifiers].
//! 3. Validation - document level checks: duplicate names, multiple default screens
//!    (see [validation]).
//! 4. Identity - deterministic ids, reconciled against a previous document when one is given
//!    (see [ids]).
//!
//! Building never fails from the caller's point of view: malformed nodes are reported and
//! omitted, and a panic anywhere in the builder is caught and turned into one fatal error
//! with an empty document.

pub mod ast_tree;
pub mod error;
pub mod ids;
pub mod modifiers;
pub mod validation;

pub(super) mod extraction;

pub use ast_tree::AstTreeBuilder;
pub use error::BuildError;

use crate::proto::ast::Document;
use crate::proto::parsing::ParseNode;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Options that change how the builder treats questionable input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Report unknown layout modifiers as warnings instead of ignoring them
    pub strict_modifiers: bool,
}

/// Output from the builder
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub document: Document,
    pub errors: Vec<BuildError>,
}

/// Build a document from a parse tree, reusing ids from `previous` where nodes match.
pub fn build(tree: &ParseNode, previous: Option<&Document>, options: BuildOptions) -> BuildOutput {
    guarded(tree, || {
        let mut builder = AstTreeBuilder::new(options);
        let mut document = builder.build(tree);
        let mut errors = builder.into_errors();
        errors.extend(validation::validate(&mut document));
        ids::assign_ids(&mut document, previous);
        BuildOutput { document, errors }
    })
}

/// Run the building stages, turning a panic into one fatal error and an empty document.
fn guarded(tree: &ParseNode, stages: impl FnOnce() -> BuildOutput) -> BuildOutput {
    match catch_unwind(AssertUnwindSafe(stages)) {
        Ok(output) => {
            log::debug!(
                "built {} top level nodes with {} errors",
                output.document.children.len(),
                output.errors.len()
            );
            output
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::error!("AST builder panicked: {}", message);
            BuildOutput {
                document: Document::new(),
                errors: vec![BuildError::Internal {
                    message,
                    range: tree.range.clone(),
                }],
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::diagnostics::{ProtoError, Severity, Stage};
    use crate::proto::lexing::tokenize;
    use crate::proto::parsing::parse;

    #[test]
    fn test_panic_becomes_single_fatal_error() {
        let tree = parse(&tokenize("screen A:\n  # Hi\n").tokens).tree;
        let output = guarded(&tree, || panic!("builder invariant broken"));

        assert!(output.document.children.is_empty());
        assert_eq!(output.errors.len(), 1);
        let error = ProtoError::from(&output.errors[0]);
        assert_eq!(error.stage, Stage::Builder);
        assert_eq!(error.severity, Severity::Fatal);
        assert_eq!(error.code, "internal-error");
        assert!(error.message.contains("builder invariant broken"));
    }

    #[test]
    fn test_guard_passes_output_through() {
        let tree = parse(&tokenize("screen A:\n  # Hi\n").tokens).tree;
        let output = build(&tree, None, BuildOptions::default());
        assert!(output.errors.is_empty());
        assert_eq!(output.document.children.len(), 1);
    }

    #[test]
    fn test_panic_message_from_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn std::any::Any + Send> = Box::new(3u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
