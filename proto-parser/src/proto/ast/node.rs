//! AST node types
//!
//! [`Node`] is the shared envelope (id, range, ordered children); [`NodeKind`] holds the
//! variant specific data. Variants are grouped in families:
//!
//! - views: screens and overlays (modal, drawer)
//! - components: definitions and instances
//! - primitives: heading, text, button, link, image
//! - layout: container / row / col / grid / card / header with modifiers
//! - structures: lists, navigator, floating action button, separator
//! - forms: input, select, checkbox, radio group
//! - styling: styles block and css properties

use super::range::Range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub range: Range,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// A node without id; ids are assigned by the builder's id pass.
    pub fn new(kind: NodeKind, range: Range) -> Self {
        Self {
            id: String::new(),
            kind,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// The declared name for views and component definitions
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Screen { name, .. }
            | NodeKind::Modal { name }
            | NodeKind::Drawer { name }
            | NodeKind::ComponentDef { name } => Some(name),
            _ => None,
        }
    }

    pub fn is_screen(&self) -> bool {
        matches!(self.kind, NodeKind::Screen { .. })
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self.kind, NodeKind::Modal { .. } | NodeKind::Drawer { .. })
    }

    /// Depth-first, pre-order iteration over this node and its descendants
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

/// Variant specific data of a node, serialized with a `type` tag
///
/// Fields are declared in the order they are written in the source (`![alt](src)`,
/// `@[text]{icon}(action)`). Component placeholders are bound in serialization order, so
/// reordering fields changes which value a placeholder receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NodeKind {
    // Views
    Screen {
        name: String,
        is_default: bool,
    },
    Modal {
        name: String,
    },
    Drawer {
        name: String,
    },

    // Components
    ComponentDef {
        name: String,
    },
    ComponentInstance {
        component_name: String,
        template_values: Vec<String>,
    },

    // Primitives
    Heading {
        level: u8,
        content: String,
    },
    Text {
        variant: TextVariant,
        content: String,
    },
    Button {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<String>,
        variant: ButtonVariant,
        size: ButtonSize,
    },
    Link {
        text: String,
        destination: String,
    },
    Image {
        alt: String,
        src: String,
    },

    // Layout
    Layout {
        layout_type: LayoutType,
        modifiers: Modifiers,
    },

    // Structures
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        component: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        rows: Vec<Vec<String>>,
    },
    ListItem {
        content: String,
    },
    Navigator {
        items: Vec<NavItem>,
    },
    Fab {
        icon: String,
        destination: String,
    },
    Separator,

    // Forms
    Input {
        kind: InputKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        disabled: bool,
    },
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        options: Vec<String>,
    },
    Checkbox {
        checked: bool,
        label: String,
    },
    RadioGroup {
        options: Vec<RadioOption>,
    },

    // Styling
    StylesBlock,
    CssProperty {
        name: String,
        value: String,
    },
}

impl NodeKind {
    /// Short lowercase tag used in ids and diagnostics
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Screen { .. } => "screen",
            NodeKind::Modal { .. } => "modal",
            NodeKind::Drawer { .. } => "drawer",
            NodeKind::ComponentDef { .. } => "component",
            NodeKind::ComponentInstance { .. } => "instance",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Text { .. } => "text",
            NodeKind::Button { .. } => "button",
            NodeKind::Link { .. } => "link",
            NodeKind::Image { .. } => "image",
            NodeKind::Layout { .. } => "layout",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem { .. } => "item",
            NodeKind::Navigator { .. } => "nav",
            NodeKind::Fab { .. } => "fab",
            NodeKind::Separator => "separator",
            NodeKind::Input { .. } => "input",
            NodeKind::Select { .. } => "select",
            NodeKind::Checkbox { .. } => "checkbox",
            NodeKind::RadioGroup { .. } => "radio",
            NodeKind::StylesBlock => "styles",
            NodeKind::CssProperty { .. } => "css",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Paragraph,
    Muted,
    Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
    Ghost,
}

impl ButtonVariant {
    /// Variant for the marker right after `@`
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some('_') => ButtonVariant::Secondary,
            Some('=') => ButtonVariant::Outline,
            Some('!') => ButtonVariant::Danger,
            Some('~') => ButtonVariant::Ghost,
            _ => ButtonVariant::Primary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some('+') => ButtonSize::Large,
            Some('-') => ButtonSize::Small,
            _ => ButtonSize::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl InputKind {
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some('*') => InputKind::Password,
            Some('@') => InputKind::Email,
            Some('#') => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    /// Value of the html `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Email => "email",
            InputKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Container,
    Row,
    Col,
    Grid,
    Card,
    Header,
}

impl LayoutType {
    /// Parse a layout keyword; unknown keywords fall back to a container
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            "row" => LayoutType::Row,
            "col" => LayoutType::Col,
            "grid" => LayoutType::Grid,
            "card" => LayoutType::Card,
            "header" => LayoutType::Header,
            _ => LayoutType::Container,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Container => "container",
            LayoutType::Row => "row",
            LayoutType::Col => "col",
            LayoutType::Grid => "grid",
            LayoutType::Card => "card",
            LayoutType::Header => "header",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal distribution of a layout's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    Center,
    Right,
    Between,
    Around,
    Evenly,
}

impl Justify {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "left" => Some(Justify::Left),
            "center" => Some(Justify::Center),
            "right" => Some(Justify::Right),
            "between" => Some(Justify::Between),
            "around" => Some(Justify::Around),
            "evenly" => Some(Justify::Evenly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
            Justify::Between => "between",
            Justify::Around => "around",
            Justify::Evenly => "evenly",
        }
    }
}

/// Vertical alignment of a layout's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Top,
    Middle,
    Bottom,
    Stretch,
}

impl Align {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "top" => Some(Align::Top),
            "middle" => Some(Align::Middle),
            "bottom" => Some(Align::Bottom),
            "stretch" => Some(Align::Stretch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Top => "top",
            Align::Middle => "middle",
            Align::Bottom => "bottom",
            Align::Stretch => "stretch",
        }
    }
}

/// Layout modifiers parsed from the hyphen-delimited suffix of a layout keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub px: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        *self == Modifiers::default()
    }
}

/// One entry of a navigator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub action: String,
}

/// One option of a radio group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RadioOption {
    pub label: String,
    pub selected: bool,
}
