//! AST Builder from the parse tree
//!
//! This module contains the `AstTreeBuilder`, which walks the `ParseNode` tree produced by the
//! parser and constructs the typed AST. One method per rule; the dispatcher is a `match` on
//! [`Rule`]. Nodes whose text doesn't fit their rule are reported and left out.

use super::error::BuildError;
use super::extraction;
use super::modifiers::parse_modifiers;
use super::BuildOptions;
use crate::proto::ast::{
    ButtonSize, ButtonVariant, Document, InputKind, LayoutType, NavItem, Node, NodeKind,
    RadioOption, TextVariant,
};
use crate::proto::parsing::{ParseNode, Rule};
use crate::proto::token::TokenKind;

/// A builder that constructs an AST from a `ParseNode` tree.
pub struct AstTreeBuilder {
    options: BuildOptions,
    errors: Vec<BuildError>,
}

impl AstTreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
        }
    }

    /// Errors collected so far
    pub fn errors(&self) -> &[BuildError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<BuildError> {
        self.errors
    }

    /// Builds a `Document` from a root `ParseNode`.
    pub fn build(&mut self, root: &ParseNode) -> Document {
        if root.rule != Rule::Document {
            // A lone declaration or element: build it as the only content
            return Document::with_children(self.build_node(root).into_iter().collect());
        }
        Document::with_children(self.build_nodes(&root.children))
    }

    fn build_nodes(&mut self, nodes: &[ParseNode]) -> Vec<Node> {
        nodes
            .iter()
            .filter_map(|node| self.build_node(node))
            .collect()
    }

    /// Builds a single node; `None` when the node is malformed.
    pub fn build_node(&mut self, node: &ParseNode) -> Option<Node> {
        match node.rule {
            Rule::Document => None,
            Rule::Styles => Some(self.build_styles(node)),
            Rule::CssProperty => self.build_css_property(node),
            Rule::Screen => self.build_screen(node),
            Rule::Component | Rule::Modal | Rule::Drawer => self.build_named(node),
            Rule::Heading => self.build_heading(node),
            Rule::Text => self.build_text(node),
            Rule::Button => self.build_button(node),
            Rule::Link => self.build_link(node),
            Rule::Image => self.build_image(node),
            Rule::Input => self.build_input(node),
            Rule::Checkbox => self.build_checkbox(node),
            Rule::RadioGroup => Some(self.build_radio_group(node)),
            Rule::RadioOption => None,
            Rule::List => Some(self.build_list(node)),
            Rule::ListItem => self.build_list_item(node),
            Rule::Separator => Some(Node::new(NodeKind::Separator, node.range.clone())),
            Rule::ComponentRef => self.build_component_ref(node),
            Rule::Layout => self.build_layout(node),
            Rule::Navigator => Some(self.build_navigator(node)),
            Rule::NavItem => None,
            Rule::Fab => self.build_fab(node),
        }
    }

    fn malformed(&mut self, node: &ParseNode) {
        self.errors.push(BuildError::MalformedElement {
            rule: node.rule,
            text: node.head_text().to_string(),
            range: node
                .head()
                .map(|token| token.range.clone())
                .unwrap_or_else(|| node.range.clone()),
        });
    }

    /// Run an extraction on the head token, reporting the node when it fails
    fn extract<T>(&mut self, node: &ParseNode, f: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let extracted = f(node.head_text());
        if extracted.is_none() {
            self.malformed(node);
        }
        extracted
    }

    // Declarations

    fn build_styles(&mut self, node: &ParseNode) -> Node {
        let children = self.build_nodes(&node.children);
        Node::new(NodeKind::StylesBlock, node.range.clone()).with_children(children)
    }

    fn build_css_property(&mut self, node: &ParseNode) -> Option<Node> {
        let (name, value) = self.extract(node, extraction::css_declaration)?;
        Some(Node::new(
            NodeKind::CssProperty { name, value },
            node.range.clone(),
        ))
    }

    fn build_screen(&mut self, node: &ParseNode) -> Option<Node> {
        let header = self.extract(node, extraction::screen_header)?;
        let children = self.build_nodes(&node.children);
        Some(
            Node::new(
                NodeKind::Screen {
                    name: header.name,
                    is_default: header.is_default,
                },
                node.range.clone(),
            )
            .with_children(children),
        )
    }

    fn build_named(&mut self, node: &ParseNode) -> Option<Node> {
        let name = self.extract(node, extraction::declaration_name)?;
        let kind = match node.rule {
            Rule::Component => NodeKind::ComponentDef { name },
            Rule::Modal => NodeKind::Modal { name },
            _ => NodeKind::Drawer { name },
        };
        let children = self.build_nodes(&node.children);
        Some(Node::new(kind, node.range.clone()).with_children(children))
    }

    // Primitives

    fn build_heading(&mut self, node: &ParseNode) -> Option<Node> {
        let (level, content) = self.extract(node, extraction::heading)?;
        Some(Node::new(
            NodeKind::Heading { level, content },
            node.range.clone(),
        ))
    }

    fn build_text(&mut self, node: &ParseNode) -> Option<Node> {
        let (variant, marker) = match node.head().map(|token| token.kind) {
            Some(TokenKind::MutedText) => (TextVariant::Muted, "*>"),
            Some(TokenKind::QuoteText) => (TextVariant::Quote, "\">"),
            _ => (TextVariant::Paragraph, ">"),
        };
        let content = self.extract(node, |text| extraction::text_content(text, marker))?;
        Some(Node::new(
            NodeKind::Text { variant, content },
            node.range.clone(),
        ))
    }

    fn build_button(&mut self, node: &ParseNode) -> Option<Node> {
        let data = self.extract(node, extraction::button)?;
        Some(Node::new(
            NodeKind::Button {
                text: data.label,
                action: data.action,
                icon: data.icon,
                variant: ButtonVariant::from_marker(data.variant_marker),
                size: ButtonSize::from_marker(data.size_marker),
            },
            node.range.clone(),
        ))
    }

    fn build_link(&mut self, node: &ParseNode) -> Option<Node> {
        let (text, destination) = self.extract(node, extraction::link)?;
        Some(Node::new(
            NodeKind::Link { text, destination },
            node.range.clone(),
        ))
    }

    fn build_image(&mut self, node: &ParseNode) -> Option<Node> {
        let (alt, src) = self.extract(node, extraction::image)?;
        Some(Node::new(NodeKind::Image { src, alt }, node.range.clone()))
    }

    // Forms

    fn build_input(&mut self, node: &ParseNode) -> Option<Node> {
        let data = self.extract(node, extraction::input)?;
        let kind = match data.options {
            Some(options) => NodeKind::Select {
                label: data.label,
                options,
            },
            None => NodeKind::Input {
                kind: InputKind::from_marker(data.kind_marker),
                label: data.label,
                placeholder: data.placeholder,
                disabled: data.disabled,
            },
        };
        Some(Node::new(kind, node.range.clone()))
    }

    fn build_checkbox(&mut self, node: &ParseNode) -> Option<Node> {
        let (checked, label) = self.extract(node, extraction::check_mark)?;
        Some(Node::new(
            NodeKind::Checkbox { checked, label },
            node.range.clone(),
        ))
    }

    fn build_radio_group(&mut self, node: &ParseNode) -> Node {
        let mut options = Vec::new();
        for option in &node.children {
            if let Some((selected, label)) = self.extract(option, extraction::check_mark) {
                options.push(RadioOption { label, selected });
            }
        }
        Node::new(NodeKind::RadioGroup { options }, node.range.clone())
    }

    // Structures

    fn build_list(&mut self, node: &ParseNode) -> Node {
        let items = self.build_nodes(&node.children);
        Node::new(
            NodeKind::List {
                component: None,
                rows: Vec::new(),
            },
            node.range.clone(),
        )
        .with_children(items)
    }

    fn build_list_item(&mut self, node: &ParseNode) -> Option<Node> {
        let content = self.extract(node, extraction::list_item)?;
        Some(Node::new(NodeKind::ListItem { content }, node.range.clone()))
    }

    /// `$Name: a|b` is an instance; `$Name:` with indented rows is a templated list
    fn build_component_ref(&mut self, node: &ParseNode) -> Option<Node> {
        let (component_name, template_values) = self.extract(node, extraction::component_ref)?;
        if node.children.is_empty() {
            return Some(Node::new(
                NodeKind::ComponentInstance {
                    component_name,
                    template_values,
                },
                node.range.clone(),
            ));
        }

        let mut rows = Vec::new();
        for row in &node.children {
            if let Some(content) = self.extract(row, extraction::list_item) {
                rows.push(extraction::split_values(&content));
            }
        }
        Some(Node::new(
            NodeKind::List {
                component: Some(component_name),
                rows,
            },
            node.range.clone(),
        ))
    }

    fn build_layout(&mut self, node: &ParseNode) -> Option<Node> {
        let (keyword, segments) = self.extract(node, extraction::layout)?;
        let (modifiers, unknown) = parse_modifiers(&segments);
        if self.options.strict_modifiers {
            let range = node
                .head()
                .map(|token| token.range.clone())
                .unwrap_or_else(|| node.range.clone());
            for modifier in unknown {
                self.errors.push(BuildError::UnknownModifier {
                    modifier,
                    range: range.clone(),
                });
            }
        }
        let children = self.build_nodes(&node.children);
        Some(
            Node::new(
                NodeKind::Layout {
                    layout_type: LayoutType::parse(&keyword),
                    modifiers,
                },
                node.range.clone(),
            )
            .with_children(children),
        )
    }

    fn build_navigator(&mut self, node: &ParseNode) -> Node {
        let mut items = Vec::new();
        for item in &node.children {
            if let Some(data) = self.extract(item, extraction::nav_item) {
                let action = data.action.unwrap_or_else(|| data.label.clone());
                items.push(NavItem {
                    label: data.label,
                    icon: data.icon,
                    action,
                });
            }
        }
        Node::new(NodeKind::Navigator { items }, node.range.clone())
    }

    fn build_fab(&mut self, node: &ParseNode) -> Option<Node> {
        let (icon, destination) = self.extract(node, extraction::fab)?;
        Some(Node::new(
            NodeKind::Fab {
                icon: icon.unwrap_or_else(|| "plus".to_string()),
                destination: destination.unwrap_or_default(),
            },
            node.range.clone(),
        ))
    }
}
