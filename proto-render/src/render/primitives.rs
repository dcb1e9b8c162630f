//! Headings, text, buttons, links and images

use super::markup::{attr, escape, icon, node_attrs};
use super::targets::NavTarget;
use super::RenderContext;
use proto_parser::proto::ast::{ButtonSize, ButtonVariant, TextVariant};
use proto_parser::{Node, NodeKind};

pub fn render_primitive(node: &Node, ctx: &mut RenderContext) -> String {
    match &node.kind {
        NodeKind::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            format!(
                "<h{level}{} style=\"color:var(--proto-text);margin:0\">{}</h{level}>",
                node_attrs(&node.id, "proto-heading"),
                escape(content),
            )
        }
        NodeKind::Text { variant, content } => render_text(node, *variant, content),
        NodeKind::Button {
            text,
            action,
            icon: icon_name,
            variant,
            size,
        } => {
            let class = format!(
                "proto-button proto-button-{} proto-button-{}",
                variant.as_str(),
                size.as_str()
            );
            let nav = action
                .as_deref()
                .map(|target| NavTarget::analyze(target, ctx.document).button_attrs())
                .unwrap_or_default();
            let glyph = icon_name.as_deref().map(icon).unwrap_or_default();
            format!(
                "<button type=\"button\"{}{}{}>{}{}</button>",
                node_attrs(&node.id, &class),
                nav,
                attr("style", &button_style(*variant, *size)),
                glyph,
                escape(text)
            )
        }
        NodeKind::Link { text, destination } => format!(
            "<a{}{} style=\"color:var(--proto-primary)\">{}</a>",
            node_attrs(&node.id, "proto-link"),
            NavTarget::analyze(destination, ctx.document).link_attrs(),
            escape(text)
        ),
        NodeKind::Image { src, alt } => format!(
            "<img{}{}{} style=\"max-width:100%;border-radius:var(--proto-radius)\">",
            node_attrs(&node.id, "proto-image"),
            attr("src", src),
            attr("alt", alt)
        ),
        _ => String::new(),
    }
}

fn render_text(node: &Node, variant: TextVariant, content: &str) -> String {
    match variant {
        TextVariant::Paragraph => format!(
            "<p{} style=\"color:var(--proto-text);margin:0\">{}</p>",
            node_attrs(&node.id, "proto-text"),
            escape(content)
        ),
        TextVariant::Muted => format!(
            "<p{} style=\"color:var(--proto-muted);margin:0\">{}</p>",
            node_attrs(&node.id, "proto-text proto-muted"),
            escape(content)
        ),
        TextVariant::Quote => format!(
            "<blockquote{} style=\"border-left:3px solid var(--proto-border);color:var(--proto-muted);margin:0;padding-left:0.75rem\">{}</blockquote>",
            node_attrs(&node.id, "proto-quote"),
            escape(content)
        ),
    }
}

fn button_style(variant: ButtonVariant, size: ButtonSize) -> String {
    let colors = match variant {
        ButtonVariant::Primary => {
            "background:var(--proto-primary);color:var(--proto-on-primary);border:1px solid var(--proto-primary)"
        }
        ButtonVariant::Secondary => {
            "background:var(--proto-secondary);color:var(--proto-on-secondary);border:1px solid var(--proto-secondary)"
        }
        ButtonVariant::Outline => {
            "background:transparent;color:var(--proto-primary);border:1px solid var(--proto-primary)"
        }
        ButtonVariant::Danger => {
            "background:var(--proto-danger);color:var(--proto-on-danger);border:1px solid var(--proto-danger)"
        }
        ButtonVariant::Ghost => "background:transparent;color:var(--proto-text);border:1px solid transparent",
    };
    let padding = match size {
        ButtonSize::Small => "padding:0.25rem 0.5rem;font-size:0.875rem",
        ButtonSize::Medium => "padding:0.5rem 1rem;font-size:1rem",
        ButtonSize::Large => "padding:0.75rem 1.5rem;font-size:1.125rem",
    };
    format!("{};{};border-radius:var(--proto-radius)", colors, padding)
}

#[cfg(test)]
mod tests {
    use crate::render::{render_node, RenderContext, RenderOptions};
    use insta::assert_snapshot;
    use proto_parser::{compile, Document};

    fn first_element(source: &str) -> String {
        let document: Document = compile(source, None).document;
        let options = RenderOptions::default();
        let mut ctx = RenderContext::new(&document, &options);
        render_node(&document.children[0].children[0], &mut ctx)
    }

    #[test]
    fn test_heading() {
        assert_snapshot!(
            first_element("screen A:\n  ## Hello <world>\n"),
            @r#"<h2 class="proto-heading" data-id="heading-0-0" style="color:var(--proto-text);margin:0">Hello &lt;world&gt;</h2>"#
        );
    }

    #[test]
    fn test_muted_text() {
        assert_snapshot!(
            first_element("screen A:\n  *> quiet\n"),
            @r#"<p class="proto-text proto-muted" data-id="text-0-0" style="color:var(--proto-muted);margin:0">quiet</p>"#
        );
    }

    #[test]
    fn test_button_to_screen() {
        let html = first_element("screen Home:\n  @[Go](Settings)\nscreen Settings:\n");
        assert!(html.starts_with(
            "<button type=\"button\" class=\"proto-button proto-button-primary proto-button-medium\" data-id=\"button-0-0\" data-nav=\"Settings\" data-nav-type=\"internal\""
        ));
        assert!(!html.contains("href"));
        assert!(html.ends_with(">Go</button>"));
    }

    #[test]
    fn test_button_with_icon_and_action() {
        let html = first_element("screen A:\n  @![Delete]{trash}(remove())\n");
        assert!(html.contains("proto-button-danger"));
        assert!(html.contains("data-nav=\"remove()\" data-nav-type=\"action\""));
        assert!(html.contains(
            "<span class=\"proto-icon\" data-icon=\"trash\" aria-hidden=\"true\"></span>Delete"
        ));
    }

    #[test]
    fn test_external_link() {
        assert_snapshot!(
            first_element("screen A:\n  #[Docs](https://x.dev)\n"),
            @r#"<a class="proto-link" data-id="link-0-0" href="https://x.dev" target="_blank" data-nav="https://x.dev" data-nav-type="external" style="color:var(--proto-primary)">Docs</a>"#
        );
    }

    #[test]
    fn test_image() {
        assert_snapshot!(
            first_element("screen A:\n  ![Logo](logo.png)\n"),
            @r#"<img class="proto-image" data-id="image-0-0" src="logo.png" alt="Logo" style="max-width:100%;border-radius:var(--proto-radius)">"#
        );
    }
}
