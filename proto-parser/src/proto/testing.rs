//! Testing utilities for AST assertions
//!
//!     Parser tests verify AST shape and content, not node counts. Walking the AST by hand in
//!     every test is verbose and breaks on every change to the node types, so tests go through
//!     two helpers:
//!
//!         1. Known-good sources from [samples](samples), instead of ad-hoc strings scattered
//!            across test files. Small targeted snippets are fine for unit tests of a single
//!            construct; anything document shaped should come from the samples.
//!         2. The fluent [assert_ast](fn@assert_ast) API, which checks a whole hierarchy at
//!            once and reports the path of the failing node.
//!
//! Example
//!
//!     ```rust,ignore
//!     use proto_parser::proto::testing::{assert_ast, samples};
//!     use proto_parser::compile;
//!
//!     let result = compile(samples::HOME_AND_SETTINGS, None);
//!     assert_ast(&result.document)
//!         .item_count(2)
//!         .item(0, |item| {
//!             item.assert_screen()
//!                 .name("Home")
//!                 .is_default(true)
//!                 .child(0, |child| {
//!                     child.assert_heading().level(1).content("Welcome");
//!                 })
//!                 .child(1, |child| {
//!                     child.assert_button().text("Go").action("Settings");
//!                 });
//!         });
//!     ```
//!
//!     A failing assertion panics with the path of the node, e.g.
//!     `items[0].children[1]: Expected Button, found Heading`.

pub mod ast_assertions;
pub mod samples;

pub use ast_assertions::{
    assert_ast, ButtonAssertion, DocumentAssertion, HeadingAssertion, LayoutAssertion,
    ListAssertion, NodeAssertion, TextAssertion, ViewAssertion,
};
