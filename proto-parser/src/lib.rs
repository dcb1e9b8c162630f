//! # proto-parser
//!
//! Compiler front-end for the proto UI description language.
//!
//! File Layout
//!
//!     The crate follows the pipeline stages, each in its own module:
//!
//!     src/proto
//!       ├── token       Token kinds (logos) and the Token struct
//!       ├── lexing      Base tokenization + semantic indentation
//!       ├── parsing     Recursive descent parser producing the ParseNode tree
//!       ├── building    ParseNode tree -> AST, modifiers, deterministic ids
//!       ├── ast         AST node types, ranges, lookups
//!       ├── diagnostics ProtoError, the caller facing error record
//!       └── pipeline    compile(), the single entry point tying it together
//!
//!     For testing helpers see the [testing module](proto::testing).

pub mod proto;

pub use proto::ast::{Document, Node, NodeKind};
pub use proto::diagnostics::{ProtoError, Severity, Stage};
pub use proto::pipeline::{compile, compile_with, CompileOptions, CompileResult};
