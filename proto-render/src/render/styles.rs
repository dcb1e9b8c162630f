//! The user's `styles:` block
//!
//! Properties are emitted as-is on the document root, so `--primary: #3366ff` overrides a
//! theme variable or defines a new one. Characters that could close the rule or the style
//! element are stripped from names and values.

use super::markup::node_attrs;
use proto_parser::{Node, NodeKind};

pub fn render_styles(node: &Node) -> String {
    let declarations: String = node
        .children
        .iter()
        .filter_map(|child| match &child.kind {
            NodeKind::CssProperty { name, value } => {
                Some(format!("{}:{};", sanitize(name), sanitize(value)))
            }
            _ => {
                log::warn!("{} node {} inside styles, skipped", child.kind.tag(), child.id);
                None
            }
        })
        .collect();

    if declarations.is_empty() {
        return String::new();
    }
    format!(
        "<style{}>.proto-document{{{}}}</style>",
        node_attrs(&node.id, "proto-styles"),
        declarations
    )
}

fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '{' | '}' | ';' | '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use proto_parser::compile;

    #[test]
    fn test_styles_block() {
        let document = compile("styles:\n  --primary: #3366ff\n  gap: 4px;\n", None).document;
        assert_snapshot!(
            render_styles(&document.children[0]),
            @r#"<style class="proto-styles" data-id="styles-0">.proto-document{--primary:#3366ff;gap:4px;}</style>"#
        );
    }

    #[test]
    fn test_injection_is_stripped() {
        assert_eq!(sanitize("red}</style><script>"), "red/stylescript");
    }
}
