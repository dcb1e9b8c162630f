//! AST definitions and utilities for the proto language
//!
//!     This module provides the typed Abstract Syntax Tree produced by the builder and consumed
//!     by the renderer and the route manager, along with source position tracking.
//!
//! Document and Declarations
//!
//!     A proto document is a flat list of top level declarations: screens, reusable component
//!     definitions, overlays (modals and drawers) and style blocks. Declarations hold elements;
//!     layouts hold elements too, so the tree can be nested arbitrarily deep, while everything
//!     else is a leaf or a fixed shape (a radio group holds options, a styles block holds css
//!     properties).
//!
//!     See [Document](document::Document) for the root, and [Node](node::Node) /
//!     [NodeKind](node::NodeKind) for the element variants.
//!
//! Identity
//!
//!     Every node carries an `id` assigned by the builder from its structural position (see
//!     [ids](crate::proto::building::ids)). Ids survive small edits when the previous document
//!     is handed to `compile`, which is what keeps selection or animation state keyed by id
//!     stable in editors.
//!
//! Serialization
//!
//!     The AST is serde-serializable. Node variants are tagged with a `type` field and flattened
//!     into the node, so a heading serializes as
//!     `{"id": "heading-0-0", "type": "Heading", "level": 1, "content": "Welcome", ...}`.
//!     Component instantiation relies on this: a definition's subtree is serialized, its
//!     `%prop` placeholders are substituted and the result is deserialized back.
//!
//! Location Tracking
//!
//!     Tokens carry a byte range into the source, converted once to line:column positions by
//!     [`SourceLocation`](range::SourceLocation). Parse nodes and AST nodes take the bounding
//!     box of their tokens and children.

pub mod document;
pub mod node;
pub mod range;

pub use document::Document;
pub use node::{
    Align, ButtonSize, ButtonVariant, InputKind, Justify, LayoutType, Modifiers, NavItem, Node,
    NodeKind, RadioOption, TextVariant,
};
pub use range::{Position, Range, SourceLocation};
