//! Compile pipeline
//!
//! This module chains the stages into the one call editors and tools use:
//!
//! 1. **Tokenization** - logos scan plus semantic indentation ([lexing](crate::proto::lexing))
//! 2. **Parsing** - recursive descent into a parse tree ([parsing](crate::proto::parsing))
//! 3. **Building** - typed AST, validation and ids ([building](crate::proto::building))
//!
//! Every stage recovers from errors, so `compile` always returns a document (possibly empty)
//! and the full list of diagnostics. Stage errors are converted into [`ProtoError`]s; a parser
//! error on a line that already has a lexer error is dropped, since the bad character is the
//! root cause of both.
//!
//! ```rust,ignore
//! use proto_parser::compile;
//!
//! let first = compile("screen Home:\n  # Welcome\n", None);
//! let second = compile("screen Home:\n  # Welcome\n  > more\n", Some(&first.document));
//! assert_eq!(first.document.children[0].id, second.document.children[0].id);
//! ```

use crate::proto::ast::Document;
use crate::proto::building::{self, BuildOptions};
use crate::proto::diagnostics::{sort_diagnostics, ProtoError};
use crate::proto::lexing::{self, DEFAULT_TAB_WIDTH};
use crate::proto::parsing;
use serde::Serialize;
use std::collections::HashSet;

/// Knobs for a compile run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub tab_width: usize,
    pub strict_modifiers: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            strict_modifiers: false,
        }
    }
}

/// The document and every diagnostic produced while compiling it
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompileResult {
    pub document: Document,
    pub errors: Vec<ProtoError>,
}

impl CompileResult {
    /// True when nothing of error severity or above was reported
    pub fn is_ok(&self) -> bool {
        self.errors.iter().all(ProtoError::is_warning)
    }
}

/// Compile source text with default options.
pub fn compile(source: &str, previous: Option<&Document>) -> CompileResult {
    compile_with(source, previous, &CompileOptions::default())
}

/// Compile source text, reusing ids from `previous` where the structure matches.
pub fn compile_with(
    source: &str,
    previous: Option<&Document>,
    options: &CompileOptions,
) -> CompileResult {
    let lexed = lexing::tokenize_with(source, options.tab_width);
    let parsed = parsing::parse(&lexed.tokens);
    let built = building::build(
        &parsed.tree,
        previous,
        BuildOptions {
            strict_modifiers: options.strict_modifiers,
        },
    );

    let lex_lines: HashSet<usize> = lexed
        .errors
        .iter()
        .map(|error| error.range().start.line)
        .collect();

    let mut errors: Vec<ProtoError> = lexed.errors.iter().map(ProtoError::from).collect();
    errors.extend(
        parsed
            .errors
            .iter()
            .filter(|error| !lex_lines.contains(&error.range().start.line))
            .map(ProtoError::from),
    );
    errors.extend(built.errors.iter().map(ProtoError::from));
    sort_diagnostics(&mut errors);

    log::debug!(
        "compiled {} bytes into {} declarations, {} diagnostics",
        source.len(),
        built.document.children.len(),
        errors.len()
    );

    CompileResult {
        document: built.document,
        errors,
    }
}
