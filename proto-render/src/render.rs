//! HTML renderer
//!
//!     Walks the AST and writes markup. Dispatch is a `match` on the node kind, one module per
//!     family:
//!
//!     - [views]: screens, modals, drawers
//!     - [primitives]: heading, text, button, link, image
//!     - [layout]: containers and their modifiers
//!     - [structures]: lists, navigator, floating action button, separator
//!     - [forms]: inputs, selects, checkboxes, radio groups
//!     - [components]: instantiation of component definitions
//!     - [styles]: the user's styles block
//!
//!     Rendering never fails. Problems (a missing component, runaway recursion) become inline
//!     placeholders plus an entry in [`RenderResult::errors`]; nodes that are only meaningful
//!     inside a parent are logged and skipped.
//!
//! Output Conventions
//!
//!     - Every element carries a `proto-*` class and, where it has one, `data-id` with the node id.
//!     - Colors come from `var(--proto-*)` variables set by the [theme](theme::Theme).
//!     - Screens other than the current one, and closed overlays, carry `style="display:none"`.
//!     - Navigation-bearing elements carry `data-nav` / `data-nav-type`, see [targets].
//!
//!     For the same document and options the output is byte for byte the same.

pub mod components;
pub mod context;
pub mod forms;
pub mod layout;
pub mod markup;
pub mod primitives;
pub mod structures;
pub mod styles;
pub mod targets;
pub mod theme;
pub mod views;

pub use context::{RenderContext, RenderOptions, DEFAULT_MAX_COMPONENT_DEPTH};
pub use targets::NavTarget;
pub use theme::Theme;

use proto_parser::{Document, Node, NodeKind, ProtoError};
use serde::Serialize;

/// Markup for a document plus the problems met while rendering it
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderResult {
    pub html: String,
    pub errors: Vec<ProtoError>,
}

/// Render a whole document.
pub fn render(document: &Document, options: &RenderOptions) -> RenderResult {
    let mut ctx = RenderContext::new(document, options);
    let body = render_children(&document.children, &mut ctx);

    let fragment = format!(
        "<div class=\"proto-document\" data-theme=\"{}\">{}{}</div>",
        options.theme,
        options.theme.style_block(),
        body
    );
    let html = if options.wrap_document {
        wrap_document(&fragment, ctx.current_screen.as_deref())
    } else {
        fragment
    };

    log::debug!(
        "rendered {} declarations into {} bytes, {} errors",
        document.children.len(),
        html.len(),
        ctx.errors.len()
    );

    RenderResult {
        html,
        errors: ctx.errors.iter().map(ProtoError::from).collect(),
    }
}

/// Render one node and its subtree.
pub fn render_node(node: &Node, ctx: &mut RenderContext) -> String {
    match &node.kind {
        NodeKind::Screen { .. } | NodeKind::Modal { .. } | NodeKind::Drawer { .. } => {
            views::render_view(node, ctx)
        }
        // Definitions are templates, rendered only through instances
        NodeKind::ComponentDef { .. } => String::new(),
        NodeKind::ComponentInstance { .. } => components::render_instance(node, ctx),

        NodeKind::Heading { .. }
        | NodeKind::Text { .. }
        | NodeKind::Button { .. }
        | NodeKind::Link { .. }
        | NodeKind::Image { .. } => primitives::render_primitive(node, ctx),

        NodeKind::Layout { .. } => layout::render_layout(node, ctx),

        NodeKind::List { .. }
        | NodeKind::Navigator { .. }
        | NodeKind::Fab { .. }
        | NodeKind::Separator => structures::render_structure(node, ctx),

        NodeKind::Input { .. }
        | NodeKind::Select { .. }
        | NodeKind::Checkbox { .. }
        | NodeKind::RadioGroup { .. } => forms::render_form(node, ctx),

        NodeKind::StylesBlock => styles::render_styles(node),

        NodeKind::ListItem { .. } | NodeKind::CssProperty { .. } => {
            log::warn!(
                "{} node {} outside its parent, skipped",
                node.kind.tag(),
                node.id
            );
            String::new()
        }
    }
}

pub(crate) fn render_children(nodes: &[Node], ctx: &mut RenderContext) -> String {
    nodes.iter().map(|node| render_node(node, ctx)).collect()
}

fn wrap_document(body: &str, title: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="proto">
  <title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        markup::escape(title.unwrap_or("proto")),
        body
    )
}
