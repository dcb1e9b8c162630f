//! Intermediate Representation for the parser
//!
//! This module defines the concrete parse tree the parser produces. The tree is a tree of
//! [`ParseNode`]s, which describes the desired AST structure without coupling the parser to
//! the AST building logic: each node only knows the rule it matched, the tokens of its own
//! line and its sub-trees.

use crate::proto::ast::range::Range;
use crate::proto::token::Token;
use serde::Serialize;
use std::fmt;

/// The grammar rule a parse node was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Document,
    Styles,
    CssProperty,
    Screen,
    Component,
    Modal,
    Drawer,
    Heading,
    Text,
    Button,
    Link,
    Image,
    Input,
    Checkbox,
    RadioGroup,
    RadioOption,
    List,
    ListItem,
    Separator,
    ComponentRef,
    Layout,
    Navigator,
    NavItem,
    Fab,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Document => "document",
            Rule::Styles => "styles",
            Rule::CssProperty => "css-property",
            Rule::Screen => "screen",
            Rule::Component => "component",
            Rule::Modal => "modal",
            Rule::Drawer => "drawer",
            Rule::Heading => "heading",
            Rule::Text => "text",
            Rule::Button => "button",
            Rule::Link => "link",
            Rule::Image => "image",
            Rule::Input => "input",
            Rule::Checkbox => "checkbox",
            Rule::RadioGroup => "radio-group",
            Rule::RadioOption => "radio-option",
            Rule::List => "list",
            Rule::ListItem => "list-item",
            Rule::Separator => "separator",
            Rule::ComponentRef => "component-ref",
            Rule::Layout => "layout",
            Rule::Navigator => "navigator",
            Rule::NavItem => "nav-item",
            Rule::Fab => "fab",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseNode {
    pub rule: Rule,
    pub tokens: Vec<Token>,
    pub children: Vec<ParseNode>,
    pub range: Range,
}

impl ParseNode {
    /// Creates a new `ParseNode`; the range covers its tokens and children.
    pub fn new(rule: Rule, tokens: Vec<Token>, children: Vec<ParseNode>) -> Self {
        let range = Range::bounding_box(
            tokens
                .iter()
                .map(|token| &token.range)
                .chain(children.iter().map(|child| &child.range)),
        )
        .unwrap_or_default();
        Self {
            rule,
            tokens,
            children,
            range,
        }
    }

    /// The first token of the node, usually the line that introduced it
    pub fn head(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Text of the first token, or empty for token-less nodes
    pub fn head_text(&self) -> &str {
        self.head().map(|token| token.text.as_str()).unwrap_or("")
    }

    /// Count all nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ParseNode::node_count).sum::<usize>()
    }
}
