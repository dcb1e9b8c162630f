//! Recursive descent parser
//!
//! One method per production, driven by the kind of the next token. Productions never fail:
//! a mismatch records a [`ParseError`], resynchronizes and returns whatever could be built.

use super::ir::{ParseNode, Rule};
use crate::proto::ast::range::Range;
use crate::proto::diagnostics::{ProtoError, Stage};
use crate::proto::token::{describe_expected, Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// Deepest block nesting the parser accepts, the declaration's own block included
pub const MAX_NESTING_DEPTH: usize = 64;

/// A grammar mismatch, or a block nested past [`MAX_NESTING_DEPTH`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseError {
    pub expected: Vec<TokenKind>,
    pub found: Token,
    /// Enclosing rules, outermost first
    pub rule_stack: Vec<Rule>,
    /// Set when the block at `found` was dropped for nesting too deep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nesting_limit: Option<usize>,
}

impl ParseError {
    pub fn range(&self) -> &Range {
        &self.found.range
    }

    pub fn code(&self) -> &'static str {
        if self.nesting_limit.is_some() {
            return "nesting-too-deep";
        }
        match self.found.kind {
            TokenKind::Indent => "unexpected-indent",
            TokenKind::Eof => "unexpected-eof",
            _ => "unexpected-token",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(limit) = self.nesting_limit {
            return write!(f, "Block nested deeper than {} levels was skipped", limit);
        }
        write!(
            f,
            "Expected {}, found {}",
            describe_expected(&self.expected),
            self.found
        )?;
        if let Some(rule) = self.rule_stack.last() {
            write!(f, " in {}", rule)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<&ParseError> for ProtoError {
    fn from(error: &ParseError) -> Self {
        let found = if error.found.text.is_empty() {
            error.found.kind.describe().to_string()
        } else {
            error.found.text.clone()
        };
        ProtoError::at_range(Stage::Parser, error.code(), error.to_string(), error.range())
            .with_unexpected(found)
            .with_expected(
                error
                    .expected
                    .iter()
                    .map(|kind| kind.describe().to_string())
                    .collect(),
            )
    }
}

/// Output from the parser: a tree for whatever parsed, plus every mismatch
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub tree: ParseNode,
    pub errors: Vec<ParseError>,
}

/// Parse a token list produced by [`tokenize`](crate::proto::lexing::tokenize).
pub fn parse(tokens: &[Token]) -> ParseOutput {
    let mut parser = Parser::new(tokens);
    let tree = parser.document();
    log::debug!(
        "parsed {} nodes with {} errors",
        tree.node_count(),
        parser.errors.len()
    );
    ParseOutput {
        tree,
        errors: parser.errors,
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
    rule_stack: Vec<Rule>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        let end = tokens
            .last()
            .map(|token| {
                Range::new(
                    token.range.span.end..token.range.span.end,
                    token.range.end,
                    token.range.end,
                )
            })
            .unwrap_or_default();
        Self {
            tokens,
            pos: 0,
            eof: Token::synthetic(TokenKind::Eof, end),
            rule_stack: vec![Rule::Document],
            errors: Vec::new(),
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn error(&mut self, expected: &[TokenKind]) {
        let error = ParseError {
            expected: expected.to_vec(),
            found: self.peek().clone(),
            rule_stack: self.rule_stack.clone(),
            nesting_limit: None,
        };
        log::debug!("parse error: {}", error);
        self.errors.push(error);
    }

    fn nesting_error(&mut self) {
        let error = ParseError {
            expected: Vec::new(),
            found: self.peek().clone(),
            rule_stack: self.rule_stack.clone(),
            nesting_limit: Some(MAX_NESTING_DEPTH),
        };
        log::debug!("parse error: {}", error);
        self.errors.push(error);
    }

    // Resynchronization

    /// Skip the rest of the current line, newline included
    fn skip_line(&mut self) {
        while !self.at(TokenKind::Eof) {
            if self.advance().kind == TokenKind::Newline {
                break;
            }
        }
    }

    /// Skip an indented block, if one starts here
    fn skip_block(&mut self) {
        if !self.at(TokenKind::Indent) {
            return;
        }
        let mut depth = 0usize;
        while !self.at(TokenKind::Eof) {
            match self.advance().kind {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Drop the broken line and whatever was nested under it
    fn recover_line(&mut self) {
        if !self.at(TokenKind::Indent) {
            self.skip_line();
        }
        self.skip_block();
    }

    /// Skip to the next declaration at depth 0
    fn recover_top_level(&mut self) {
        let mut depth = 0usize;
        loop {
            let kind = self.peek_kind();
            match kind {
                TokenKind::Eof => return,
                k if k.is_declaration() && depth == 0 => return,
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }
    }

    /// Expect the end of a line; false if the line had trailing tokens
    fn end_of_line(&mut self) -> bool {
        if self.at(TokenKind::Newline) {
            self.advance();
            true
        } else {
            self.error(&[TokenKind::Newline]);
            self.skip_line();
            false
        }
    }

    /// End of a line that can't own a nested block
    fn end_of_leaf_line(&mut self) {
        let clean = self.end_of_line();
        if clean && self.at(TokenKind::Indent) {
            self.error(&[TokenKind::Newline]);
        }
        self.skip_block();
    }

    fn enter(&mut self, rule: Rule) {
        self.rule_stack.push(rule);
    }

    fn leave(&mut self) {
        self.rule_stack.pop();
    }

    // Productions

    fn document(&mut self) -> ParseNode {
        let mut children = Vec::new();
        loop {
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::Newline | TokenKind::Dedent => {
                    self.advance();
                }
                kind if kind.is_declaration() => children.push(self.declaration(kind)),
                _ => {
                    self.error(TokenKind::DECLARATIONS);
                    if !self.at(TokenKind::Indent) {
                        self.advance();
                    }
                    self.recover_top_level();
                }
            }
        }
        ParseNode::new(Rule::Document, Vec::new(), children)
    }

    fn declaration(&mut self, kind: TokenKind) -> ParseNode {
        let rule = match kind {
            TokenKind::StylesDecl => return self.styles(),
            TokenKind::ScreenDecl => Rule::Screen,
            TokenKind::ComponentDecl => Rule::Component,
            TokenKind::ModalDecl => Rule::Modal,
            _ => Rule::Drawer,
        };
        self.enter(rule);
        let header = self.advance();
        self.end_of_line();
        let children = self.optional_block();
        self.leave();
        ParseNode::new(rule, vec![header], children)
    }

    fn styles(&mut self) -> ParseNode {
        self.enter(Rule::Styles);
        let header = self.advance();
        self.end_of_line();
        let children = self.indented_lines(TokenKind::CssDeclaration, Rule::CssProperty);
        self.leave();
        ParseNode::new(Rule::Styles, vec![header], children)
    }

    /// `INDENT (LINE NEWLINE | NEWLINE)* DEDENT` where every line must be of one kind
    fn indented_lines(&mut self, line: TokenKind, rule: Rule) -> Vec<ParseNode> {
        let mut children = Vec::new();
        if !self.at(TokenKind::Indent) {
            return children;
        }
        self.advance();
        loop {
            match self.peek_kind() {
                TokenKind::Dedent => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.advance();
                }
                kind if kind == line => {
                    let token = self.advance();
                    children.push(ParseNode::new(rule, vec![token], Vec::new()));
                    self.end_of_leaf_line();
                }
                _ => {
                    self.error(&[line]);
                    self.recover_line();
                }
            }
        }
        children
    }

    fn optional_block(&mut self) -> Vec<ParseNode> {
        if !self.at(TokenKind::Indent) {
            return Vec::new();
        }
        // Every open block has its rule on the stack, above `Document`
        if self.rule_stack.len() > MAX_NESTING_DEPTH + 1 {
            self.nesting_error();
            self.skip_block();
            return Vec::new();
        }
        self.block()
    }

    fn block(&mut self) -> Vec<ParseNode> {
        let mut children = Vec::new();
        self.advance();
        loop {
            match self.peek_kind() {
                TokenKind::Dedent => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.advance();
                }
                kind if kind.is_element() => children.push(self.element(kind)),
                _ => {
                    self.error(TokenKind::ELEMENTS);
                    self.recover_line();
                }
            }
        }
        children
    }

    fn element(&mut self, kind: TokenKind) -> ParseNode {
        match kind {
            TokenKind::Radio => self.grouped(TokenKind::Radio, Rule::RadioGroup, Rule::RadioOption),
            TokenKind::ListItem => self.grouped(TokenKind::ListItem, Rule::List, Rule::ListItem),
            TokenKind::ComponentRef => self.component_ref(),
            TokenKind::Layout => self.layout(),
            TokenKind::Navigator => self.navigator(),
            _ => self.leaf(leaf_rule(kind)),
        }
    }

    fn leaf(&mut self, rule: Rule) -> ParseNode {
        self.enter(rule);
        let token = self.advance();
        self.end_of_leaf_line();
        self.leave();
        ParseNode::new(rule, vec![token], Vec::new())
    }

    /// Consecutive lines of the same kind, gathered under one group node
    fn grouped(&mut self, line: TokenKind, group: Rule, item: Rule) -> ParseNode {
        self.enter(group);
        let mut items = Vec::new();
        while self.at(line) {
            let token = self.advance();
            items.push(ParseNode::new(item, vec![token], Vec::new()));
            self.end_of_leaf_line();
        }
        self.leave();
        ParseNode::new(group, Vec::new(), items)
    }

    fn component_ref(&mut self) -> ParseNode {
        self.enter(Rule::ComponentRef);
        let header = self.advance();
        self.end_of_line();
        let rows = self.indented_lines(TokenKind::ListItem, Rule::ListItem);
        self.leave();
        ParseNode::new(Rule::ComponentRef, vec![header], rows)
    }

    fn layout(&mut self) -> ParseNode {
        self.enter(Rule::Layout);
        let header = self.advance();
        self.end_of_line();
        let children = self.optional_block();
        self.leave();
        ParseNode::new(Rule::Layout, vec![header], children)
    }

    fn navigator(&mut self) -> ParseNode {
        self.enter(Rule::Navigator);
        let header = self.advance();
        self.end_of_line();
        let items = self.indented_lines(TokenKind::ListItem, Rule::NavItem);
        self.leave();
        ParseNode::new(Rule::Navigator, vec![header], items)
    }
}

fn leaf_rule(kind: TokenKind) -> Rule {
    match kind {
        TokenKind::Heading => Rule::Heading,
        TokenKind::Paragraph | TokenKind::MutedText | TokenKind::QuoteText => Rule::Text,
        TokenKind::Button => Rule::Button,
        TokenKind::Link => Rule::Link,
        TokenKind::Image => Rule::Image,
        TokenKind::Input => Rule::Input,
        TokenKind::Checkbox => Rule::Checkbox,
        TokenKind::Fab => Rule::Fab,
        _ => Rule::Separator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::lexing::tokenize;

    fn parse_source(source: &str) -> ParseOutput {
        let lexed = tokenize(source);
        assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
        parse(&lexed.tokens)
    }

    fn rules(nodes: &[ParseNode]) -> Vec<Rule> {
        nodes.iter().map(|node| node.rule).collect()
    }

    #[test]
    fn test_declarations() {
        let output = parse_source(
            "styles:\n  --primary: red\nscreen Home:\n  # Hi\ncomponent Card:\n  > %body\nmodal M:\ndrawer D:\n",
        );
        assert!(output.errors.is_empty());
        assert_eq!(
            rules(&output.tree.children),
            vec![
                Rule::Styles,
                Rule::Screen,
                Rule::Component,
                Rule::Modal,
                Rule::Drawer
            ]
        );
        assert_eq!(rules(&output.tree.children[0].children), vec![Rule::CssProperty]);
    }

    #[test]
    fn test_radio_and_list_grouping() {
        let output = parse_source(
            "screen A:\n  (X) One\n  ( ) Two\n\n  ( ) Three\n  - a\n  - b\n",
        );
        assert!(output.errors.is_empty());
        let screen = &output.tree.children[0];
        assert_eq!(
            rules(&screen.children),
            vec![Rule::RadioGroup, Rule::RadioGroup, Rule::List]
        );
        assert_eq!(screen.children[0].children.len(), 2);
        assert_eq!(screen.children[1].children.len(), 1);
        assert_eq!(screen.children[2].children.len(), 2);
    }

    #[test]
    fn test_templated_component_ref() {
        let output = parse_source("screen A:\n  $Card:\n    - One | First\n    - Two | Second\n");
        assert!(output.errors.is_empty());
        let reference = &output.tree.children[0].children[0];
        assert_eq!(reference.rule, Rule::ComponentRef);
        assert_eq!(rules(&reference.children), vec![Rule::ListItem, Rule::ListItem]);
    }

    #[test]
    fn test_nested_layouts_and_navigator() {
        let output = parse_source(
            "screen A:\n  row:\n    col:\n      > deep\n  nav:\n    - Home {home} (A)\n",
        );
        assert!(output.errors.is_empty());
        let screen = &output.tree.children[0];
        assert_eq!(rules(&screen.children), vec![Rule::Layout, Rule::Navigator]);
        assert_eq!(screen.children[0].children[0].children[0].rule, Rule::Text);
        assert_eq!(rules(&screen.children[1].children), vec![Rule::NavItem]);
    }

    #[test]
    fn test_two_independent_errors() {
        let output = parse_source("screen A:\n  hello\n  # ok\nscreen B:\n  [a]\n  > fine\n");
        assert_eq!(output.errors.len(), 2);
        assert_eq!(output.errors[0].found.range.start.line, 1);
        assert_eq!(output.errors[1].found.range.start.line, 4);
        let screens = &output.tree.children;
        assert_eq!(screens.len(), 2);
        assert_eq!(rules(&screens[0].children), vec![Rule::Heading]);
        assert_eq!(rules(&screens[1].children), vec![Rule::Text]);
    }

    #[test]
    fn test_error_records_rule_stack() {
        let output = parse_source("screen A:\n  row:\n    hello\n");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(
            output.errors[0].rule_stack,
            vec![Rule::Document, Rule::Screen, Rule::Layout]
        );
        assert_eq!(output.errors[0].expected, TokenKind::ELEMENTS.to_vec());
    }

    #[test]
    fn test_block_under_broken_line_is_skipped() {
        let output = parse_source("screen A:\n  oops\n    > nested\n  > kept\n");
        assert_eq!(output.errors.len(), 1);
        let screen = &output.tree.children[0];
        assert_eq!(screen.children.len(), 1);
        assert_eq!(screen.children[0].head_text(), "> kept");
    }

    #[test]
    fn test_top_level_garbage_skips_to_next_declaration() {
        let output = parse_source("> stray\n  > nested\nscreen A:\n  # Hi\n");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(rules(&output.tree.children), vec![Rule::Screen]);
    }

    #[test]
    fn test_block_under_leaf_is_an_error() {
        let output = parse_source("screen A:\n  # Title\n    > under heading\n");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].found.kind, TokenKind::Indent);
        assert_eq!(output.errors[0].code(), "unexpected-indent");
    }

    /// A screen holding `layouts` nested rows, the innermost with one paragraph
    fn nested_rows(layouts: usize) -> String {
        let mut source = String::from("screen A:\n");
        for level in 1..=layouts {
            source.push_str(&format!("{}row:\n", "  ".repeat(level)));
        }
        source.push_str(&format!("{}> deep\n", "  ".repeat(layouts + 1)));
        source
    }

    fn depth(node: &ParseNode) -> usize {
        1 + node.children.iter().map(depth).max().unwrap_or(0)
    }

    fn innermost(node: &ParseNode) -> &ParseNode {
        node.children.first().map(innermost).unwrap_or(node)
    }

    #[test]
    fn test_nesting_at_the_limit_is_accepted() {
        let output = parse_source(&nested_rows(MAX_NESTING_DEPTH - 1));
        assert!(output.errors.is_empty());
        // document, screen, the rows and the paragraph
        assert_eq!(depth(&output.tree), MAX_NESTING_DEPTH + 2);
        assert_eq!(innermost(&output.tree).rule, Rule::Text);
    }

    #[test]
    fn test_nesting_past_the_limit_skips_the_block() {
        let output = parse_source(&nested_rows(MAX_NESTING_DEPTH));
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].code(), "nesting-too-deep");
        assert_eq!(output.errors[0].found.kind, TokenKind::Indent);
        assert_eq!(innermost(&output.tree).rule, Rule::Layout);
        assert!(innermost(&output.tree).children.is_empty());
    }

    #[test]
    fn test_parse_without_eof_token() {
        let output = parse(&[]);
        assert!(output.errors.is_empty());
        assert!(output.tree.children.is_empty());
    }
}
