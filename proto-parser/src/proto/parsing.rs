//! Parsing module for the proto language
//!
//!     This module turns the token list produced by [lexing](crate::proto::lexing) into a
//!     concrete parse tree (see [ir](ir)). The AST is built from that tree in a separate step,
//!     see [building](crate::proto::building).
//!
//! Grammar
//!
//!     The grammar is a flat sequence of top level declarations, each with an optional
//!     indented block of elements. Element lines are single tokens, so most productions are
//!     "one token followed by a newline"; the interesting ones are the groupings:
//!
//!         document    := (NEWLINE | declaration)* EOF
//!         declaration := styles | screen | component | modal | drawer
//!         screen      := SCREEN NEWLINE block?
//!         styles      := STYLES NEWLINE (INDENT (CSS NEWLINE | NEWLINE)* DEDENT)?
//!         block       := INDENT (NEWLINE | element)* DEDENT
//!         radio_group := (RADIO NEWLINE)+
//!         list        := (LIST_ITEM NEWLINE)+
//!         layout      := LAYOUT NEWLINE block?
//!         navigator   := NAV NEWLINE (INDENT (LIST_ITEM NEWLINE | NEWLINE)* DEDENT)?
//!         component_ref := COMPONENT_REF NEWLINE (INDENT (LIST_ITEM NEWLINE | NEWLINE)* DEDENT)?
//!
//!     Radio options and list items group while they sit on consecutive lines; a blank line
//!     starts a new group.
//!
//! Recovery
//!
//!     On a mismatch the parser records a [`ParseError`] and resynchronizes: inside a block it
//!     skips to the end of the line and then over any nested block that belonged to the broken
//!     line; at top level it skips to the next declaration at depth 0. Parsing never stops at
//!     the first error, so one pass reports every independent problem of a document.

pub mod ir;
pub mod parser;

pub use ir::{ParseNode, Rule};
pub use parser::{parse, ParseError, ParseOutput};
