//! Core token types shared across the lexer, parser, and tooling.
//!
//!     The proto language is line oriented: nearly every element occupies exactly one line and
//!     is recognized by a fixed punctuation marker at its start. Because of that, most tokens
//!     are element level: the whole `@[Go](Settings)` line is one `Button` token, and the
//!     builder later extracts label and action from the token text.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         Produced by the logos lexer. See [core](core) for the list and their priorities.
//!
//!     Structural Tokens:
//!         Indent, Dedent. Synthetic tokens produced by the semantic indentation mapper from the
//!         leading whitespace of each line, similar to open/close braces in c-style languages.
//!         See [semantic_indentation](crate::proto::lexing::transformations::semantic_indentation).
//!
//!     Eof closes every stream so the parser never needs to bounds check.

pub mod core;
pub mod formatting;

pub use self::core::{Token, TokenKind};
pub use formatting::{describe_expected, detokenize};
