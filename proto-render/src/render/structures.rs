//! Lists, navigator, floating action button, separator

use super::components::instantiate;
use super::markup::{attr, escape, icon, node_attrs};
use super::targets::NavTarget;
use super::{render_node, RenderContext};
use proto_parser::proto::ast::NavItem;
use proto_parser::{Node, NodeKind};

pub fn render_structure(node: &Node, ctx: &mut RenderContext) -> String {
    match &node.kind {
        NodeKind::List {
            component: Some(component),
            rows,
        } => {
            let rendered: String = rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let scope = format!("{}/{}", node.id, index);
                    format!(
                        "<li class=\"proto-list-row\">{}</li>",
                        instantiate(component, row, &scope, &node.range, ctx)
                    )
                })
                .collect();
            format!(
                "<ul{}{} style=\"list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:0.5rem\">{}</ul>",
                node_attrs(&node.id, "proto-list proto-list-templated"),
                attr("data-component", component),
                rendered
            )
        }
        NodeKind::List { component: None, .. } => {
            let items: String = node
                .children
                .iter()
                .map(|child| match &child.kind {
                    NodeKind::ListItem { content } => format!(
                        "<li{}>{}</li>",
                        node_attrs(&child.id, "proto-list-item"),
                        escape(content)
                    ),
                    _ => render_node(child, ctx),
                })
                .collect();
            format!(
                "<ul{} style=\"color:var(--proto-text);margin:0\">{}</ul>",
                node_attrs(&node.id, "proto-list"),
                items
            )
        }
        NodeKind::Navigator { items } => {
            let links: String = items.iter().map(|item| nav_item(item, ctx)).collect();
            format!(
                "<nav{} style=\"display:flex;justify-content:space-around;border-top:1px solid var(--proto-border);background:var(--proto-surface)\">{}</nav>",
                node_attrs(&node.id, "proto-nav"),
                links
            )
        }
        NodeKind::Fab {
            icon: icon_name,
            destination,
        } => {
            let nav = if destination.is_empty() {
                String::new()
            } else {
                NavTarget::analyze(destination, ctx.document).button_attrs()
            };
            format!(
                "<button type=\"button\"{}{}{} style=\"background:var(--proto-primary);color:var(--proto-on-primary);border:none\">{}</button>",
                node_attrs(&node.id, "proto-fab"),
                nav,
                attr("aria-label", icon_name),
                icon(icon_name)
            )
        }
        NodeKind::Separator => format!(
            "<hr{} style=\"border:none;border-top:1px solid var(--proto-border);margin:0.5rem 0\">",
            node_attrs(&node.id, "proto-separator")
        ),
        _ => String::new(),
    }
}

fn nav_item(item: &NavItem, ctx: &RenderContext) -> String {
    let glyph = item.icon.as_deref().map(icon).unwrap_or_default();
    format!(
        "<a class=\"proto-nav-item\"{} style=\"color:var(--proto-text);text-decoration:none;display:flex;flex-direction:column;align-items:center\">{}<span>{}</span></a>",
        NavTarget::analyze(&item.action, ctx.document).link_attrs(),
        glyph,
        escape(&item.label)
    )
}

#[cfg(test)]
mod tests {
    use crate::render::{render, render_node, RenderContext, RenderOptions};
    use insta::assert_snapshot;
    use proto_parser::compile;

    fn first_element(source: &str) -> String {
        let document = compile(source, None).document;
        let options = RenderOptions::default();
        let mut ctx = RenderContext::new(&document, &options);
        render_node(&document.children[0].children[0], &mut ctx)
    }

    #[test]
    fn test_plain_list() {
        let html = first_element("screen A:\n  - one\n  - two & three\n");
        assert!(html.starts_with("<ul class=\"proto-list\" data-id=\"list-0-0\""));
        assert!(html.contains(
            "<li class=\"proto-list-item\" data-id=\"item-0-0-0\">one</li><li class=\"proto-list-item\" data-id=\"item-0-0-1\">two &amp; three</li>"
        ));
    }

    #[test]
    fn test_separator() {
        assert_snapshot!(
            first_element("screen A:\n  ---\n"),
            @r#"<hr class="proto-separator" data-id="separator-0-0" style="border:none;border-top:1px solid var(--proto-border);margin:0.5rem 0">"#
        );
    }

    #[test]
    fn test_navigator_items() {
        let html = first_element(
            "screen Home:\n  nav:\n    - Home {home} (Home)\n    - Menu {menu} (Menu)\ndrawer Menu:\n",
        );
        assert!(html.contains(
            "href=\"#Home\" data-nav=\"Home\" data-nav-type=\"internal\""
        ));
        assert!(html.contains("href=\"#\" data-nav=\"Menu\" data-nav-type=\"toggle\""));
        assert!(html.contains("data-icon=\"menu\""));
    }

    #[test]
    fn test_fab() {
        let html = first_element("screen A:\n  (+){plus}(Compose)\nscreen Compose:\n");
        assert!(html.contains("class=\"proto-fab\""));
        assert!(html.contains("data-nav=\"Compose\" data-nav-type=\"internal\""));
        assert!(html.contains("data-icon=\"plus\""));
    }

    #[test]
    fn test_templated_list_renders_one_row_per_data_row() {
        let document = compile(
            "screen A:\n  $Card:\n    - One | First\n    - Two | Second\ncomponent Card:\n  # %title\n  > %body\n",
            None,
        )
        .document;
        let result = render(&document, &RenderOptions::default());
        assert!(result.errors.is_empty());
        assert_eq!(result.html.matches("class=\"proto-list-row\"").count(), 2);
        assert!(result.html.contains(">One</h1>"));
        assert!(result.html.contains(">Second</p>"));
        assert!(!result.html.contains("%title"));
    }
}
