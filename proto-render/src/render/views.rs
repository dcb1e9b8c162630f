//! Screens and overlays

use super::markup::{attr, node_attrs};
use super::{render_children, RenderContext};
use proto_parser::{Node, NodeKind};

const HIDDEN: &str = " style=\"display:none\"";

pub fn render_view(node: &Node, ctx: &mut RenderContext) -> String {
    let children = render_children(&node.children, ctx);
    match &node.kind {
        NodeKind::Screen { name, is_default } => {
            let mut attrs = node_attrs(&node.id, "proto-screen");
            attrs.push_str(&attr("data-screen", name));
            if *is_default {
                attrs.push_str(" data-default=\"true\"");
            }
            if !ctx.is_current(name) {
                attrs.push_str(HIDDEN);
            }
            format!("<section{}>{}</section>", attrs, children)
        }
        NodeKind::Modal { name } => {
            let attrs = overlay_attrs(node, ctx, name, "modal");
            format!(
                "<div{} role=\"dialog\" aria-modal=\"true\"><div class=\"proto-modal-content\">{}</div></div>",
                attrs, children
            )
        }
        NodeKind::Drawer { name } => {
            let attrs = overlay_attrs(node, ctx, name, "drawer");
            format!("<aside{}>{}</aside>", attrs, children)
        }
        _ => children,
    }
}

fn overlay_attrs(node: &Node, ctx: &RenderContext, name: &str, kind: &str) -> String {
    let mut attrs = node_attrs(&node.id, &format!("proto-{}", kind));
    attrs.push_str(&attr("data-overlay", name));
    attrs.push_str(&attr("data-overlay-type", kind));
    if !ctx.is_open(name) {
        attrs.push_str(HIDDEN);
    }
    attrs
}

#[cfg(test)]
mod tests {
    use crate::render::{render, RenderOptions};
    use proto_parser::compile;

    #[test]
    fn test_only_current_screen_is_visible() {
        let document = compile("screen A:\nscreen B:\n", None).document;
        let html = render(&document, &RenderOptions::default().with_current_screen("B")).html;
        assert!(html.contains(
            "<section class=\"proto-screen\" data-id=\"screen-0\" data-screen=\"A\" data-default=\"true\" style=\"display:none\">"
        ));
        assert!(html.contains(
            "<section class=\"proto-screen\" data-id=\"screen-1\" data-screen=\"B\"></section>"
        ));
    }

    #[test]
    fn test_overlays_hidden_unless_open() {
        let document = compile("screen A:\nmodal M:\ndrawer D:\n", None).document;
        let options = RenderOptions {
            open_overlays: vec!["D".into()],
            ..RenderOptions::default()
        };
        let html = render(&document, &options).html;
        assert!(html.contains(
            "data-overlay=\"M\" data-overlay-type=\"modal\" style=\"display:none\" role=\"dialog\""
        ));
        assert!(html.contains("<aside class=\"proto-drawer\" data-id=\"drawer-2\" data-overlay=\"D\" data-overlay-type=\"drawer\"></aside>"));
    }
}
