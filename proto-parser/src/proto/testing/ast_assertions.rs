//! Fluent assertion API for AST nodes
//!
//!     Tests state what they expect of a node and its subtree; the assertion types know how
//!     to find it in the current node layout. When the AST changes, only this module changes.
//!
//!     Every assertion carries a `context` string (the path from the document root) that
//!     prefixes its panic messages.

use crate::proto::ast::{
    Align, ButtonSize, ButtonVariant, Document, Justify, LayoutType, Node, NodeKind, TextVariant,
};

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.kind.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document
// ============================================================================

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top level declarations
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert on a specific top level declaration by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.children.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.children.len()
        );
        assertion(NodeAssertion {
            node: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }

    /// Assert the names of the screens, in order
    pub fn screen_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.screens().filter_map(Node::name).collect();
        assert_eq!(actual, expected, "Screen names differ");
        self
    }
}

// ============================================================================
// Any node
// ============================================================================

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

macro_rules! expect_kind {
    ($self:ident, $pattern:pat, $name:literal, $assertion:ident) => {
        match &$self.node.kind {
            $pattern => $assertion {
                node: $self.node,
                context: $self.context,
            },
            other => panic!(
                "{}: Expected {}, found {}",
                $self.context,
                $name,
                other.tag()
            ),
        }
    };
}

impl<'a> NodeAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.node.id, expected, "{}: id differs", self.context);
        self
    }

    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.node.kind.tag(),
            expected,
            "{}: node tag differs",
            self.context
        );
        self
    }

    pub fn assert_screen(self) -> ViewAssertion<'a> {
        expect_kind!(self, NodeKind::Screen { .. }, "Screen", ViewAssertion)
    }

    pub fn assert_modal(self) -> ViewAssertion<'a> {
        expect_kind!(self, NodeKind::Modal { .. }, "Modal", ViewAssertion)
    }

    pub fn assert_drawer(self) -> ViewAssertion<'a> {
        expect_kind!(self, NodeKind::Drawer { .. }, "Drawer", ViewAssertion)
    }

    pub fn assert_component(self) -> ViewAssertion<'a> {
        expect_kind!(self, NodeKind::ComponentDef { .. }, "ComponentDef", ViewAssertion)
    }

    pub fn assert_heading(self) -> HeadingAssertion<'a> {
        expect_kind!(self, NodeKind::Heading { .. }, "Heading", HeadingAssertion)
    }

    pub fn assert_text(self) -> TextAssertion<'a> {
        expect_kind!(self, NodeKind::Text { .. }, "Text", TextAssertion)
    }

    pub fn assert_button(self) -> ButtonAssertion<'a> {
        expect_kind!(self, NodeKind::Button { .. }, "Button", ButtonAssertion)
    }

    pub fn assert_layout(self) -> LayoutAssertion<'a> {
        expect_kind!(self, NodeKind::Layout { .. }, "Layout", LayoutAssertion)
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        expect_kind!(self, NodeKind::List { .. }, "List", ListAssertion)
    }

    /// Assert the node's exact data, for variants without a dedicated assertion
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(self.node.kind, expected, "{}: node data differs", self.context);
        self
    }
}

fn child_count(node: &Node, context: &str, expected: usize) {
    assert_eq!(
        node.children.len(),
        expected,
        "{}: Expected {} children, found [{}]",
        context,
        expected,
        summarize(&node.children)
    );
}

fn child<'a, F>(node: &'a Node, context: &str, index: usize, assertion: F)
where
    F: FnOnce(NodeAssertion<'a>),
{
    assert!(
        index < node.children.len(),
        "{}: Child index {} out of bounds ({} children)",
        context,
        index,
        node.children.len()
    );
    assertion(NodeAssertion {
        node: &node.children[index],
        context: format!("{}.children[{}]", context, index),
    });
}

// ============================================================================
// Views and component definitions
// ============================================================================

pub struct ViewAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> ViewAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.node.name(), Some(expected), "{}: name differs", self.context);
        self
    }

    pub fn is_default(self, expected: bool) -> Self {
        let actual = matches!(self.node.kind, NodeKind::Screen { is_default: true, .. });
        assert_eq!(actual, expected, "{}: default flag differs", self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        child_count(self.node, &self.context, expected);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        child(self.node, &self.context, index, assertion);
        self
    }
}

// ============================================================================
// Primitives
// ============================================================================

pub struct HeadingAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> HeadingAssertion<'a> {
    fn data(&self) -> (u8, &str) {
        match &self.node.kind {
            NodeKind::Heading { level, content } => (*level, content),
            _ => unreachable!(),
        }
    }

    pub fn level(self, expected: u8) -> Self {
        assert_eq!(self.data().0, expected, "{}: heading level differs", self.context);
        self
    }

    pub fn content(self, expected: &str) -> Self {
        assert_eq!(self.data().1, expected, "{}: heading content differs", self.context);
        self
    }
}

pub struct TextAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> TextAssertion<'a> {
    fn data(&self) -> (TextVariant, &str) {
        match &self.node.kind {
            NodeKind::Text { variant, content } => (*variant, content),
            _ => unreachable!(),
        }
    }

    pub fn variant(self, expected: TextVariant) -> Self {
        assert_eq!(self.data().0, expected, "{}: text variant differs", self.context);
        self
    }

    pub fn content(self, expected: &str) -> Self {
        assert_eq!(self.data().1, expected, "{}: text content differs", self.context);
        self
    }

    pub fn content_contains(self, expected: &str) -> Self {
        assert!(
            self.data().1.contains(expected),
            "{}: Expected text to contain {:?}, found {:?}",
            self.context,
            expected,
            self.data().1
        );
        self
    }
}

pub struct ButtonAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> ButtonAssertion<'a> {
    fn field<T>(&self, f: impl FnOnce(&NodeKind) -> T) -> T {
        f(&self.node.kind)
    }

    pub fn text(self, expected: &str) -> Self {
        let actual = self.field(|kind| match kind {
            NodeKind::Button { text, .. } => text.clone(),
            _ => unreachable!(),
        });
        assert_eq!(actual, expected, "{}: button text differs", self.context);
        self
    }

    pub fn action(self, expected: &str) -> Self {
        let actual = self.field(|kind| match kind {
            NodeKind::Button { action, .. } => action.clone(),
            _ => unreachable!(),
        });
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: button action differs",
            self.context
        );
        self
    }

    pub fn no_action(self) -> Self {
        let actual = self.field(|kind| match kind {
            NodeKind::Button { action, .. } => action.clone(),
            _ => unreachable!(),
        });
        assert_eq!(actual, None, "{}: expected no action", self.context);
        self
    }

    pub fn icon(self, expected: &str) -> Self {
        let actual = self.field(|kind| match kind {
            NodeKind::Button { icon, .. } => icon.clone(),
            _ => unreachable!(),
        });
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: button icon differs",
            self.context
        );
        self
    }

    pub fn variant(self, expected: ButtonVariant) -> Self {
        let actual = self.field(|kind| match kind {
            NodeKind::Button { variant, .. } => *variant,
            _ => unreachable!(),
        });
        assert_eq!(actual, expected, "{}: button variant differs", self.context);
        self
    }

    pub fn size(self, expected: ButtonSize) -> Self {
        let actual = self.field(|kind| match kind {
            NodeKind::Button { size, .. } => *size,
            _ => unreachable!(),
        });
        assert_eq!(actual, expected, "{}: button size differs", self.context);
        self
    }
}

// ============================================================================
// Layout and structures
// ============================================================================

pub struct LayoutAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> LayoutAssertion<'a> {
    pub fn layout_type(self, expected: LayoutType) -> Self {
        match &self.node.kind {
            NodeKind::Layout { layout_type, .. } => {
                assert_eq!(*layout_type, expected, "{}: layout type differs", self.context)
            }
            _ => unreachable!(),
        }
        self
    }

    /// Assert a sized modifier (`gap`, `p`, `w`, ...) by key
    pub fn modifier(self, key: &str, expected: &str) -> Self {
        let modifiers = match &self.node.kind {
            NodeKind::Layout { modifiers, .. } => modifiers,
            _ => unreachable!(),
        };
        let actual = match key {
            "w" => &modifiers.w,
            "h" => &modifiers.h,
            "p" => &modifiers.p,
            "m" => &modifiers.m,
            "px" => &modifiers.px,
            "py" => &modifiers.py,
            "gap" => &modifiers.gap,
            "cols" => &modifiers.cols,
            other => panic!("{}: unknown modifier key {}", self.context, other),
        };
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: modifier {} differs",
            self.context,
            key
        );
        self
    }

    pub fn justify(self, expected: Justify) -> Self {
        match &self.node.kind {
            NodeKind::Layout { modifiers, .. } => assert_eq!(
                modifiers.justify,
                Some(expected),
                "{}: justify differs",
                self.context
            ),
            _ => unreachable!(),
        }
        self
    }

    pub fn align(self, expected: Align) -> Self {
        match &self.node.kind {
            NodeKind::Layout { modifiers, .. } => assert_eq!(
                modifiers.align,
                Some(expected),
                "{}: align differs",
                self.context
            ),
            _ => unreachable!(),
        }
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        child_count(self.node, &self.context, expected);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        child(self.node, &self.context, index, assertion);
        self
    }
}

pub struct ListAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> ListAssertion<'a> {
    /// Assert the contents of a plain list's items
    pub fn items(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .children
            .iter()
            .map(|item| match &item.kind {
                NodeKind::ListItem { content } => content.as_str(),
                other => panic!("{}: Expected ListItem, found {}", self.context, other.tag()),
            })
            .collect();
        assert_eq!(actual, expected, "{}: list items differ", self.context);
        self
    }

    pub fn component(self, expected: &str) -> Self {
        match &self.node.kind {
            NodeKind::List { component, .. } => assert_eq!(
                component.as_deref(),
                Some(expected),
                "{}: list component differs",
                self.context
            ),
            _ => unreachable!(),
        }
        self
    }

    pub fn rows(self, expected: &[&[&str]]) -> Self {
        match &self.node.kind {
            NodeKind::List { rows, .. } => {
                let actual: Vec<Vec<&str>> = rows
                    .iter()
                    .map(|row| row.iter().map(String::as_str).collect())
                    .collect();
                let expected: Vec<Vec<&str>> = expected.iter().map(|row| row.to_vec()).collect();
                assert_eq!(actual, expected, "{}: list rows differ", self.context);
            }
            _ => unreachable!(),
        }
        self
    }
}
