//! Form controls

use super::markup::{attr, escape, node_attrs};
use super::RenderContext;
use proto_parser::{Node, NodeKind};

const FIELD_STYLE: &str = "display:flex;flex-direction:column;gap:0.25rem;color:var(--proto-text)";
const CONTROL_STYLE: &str = "padding:0.5rem;border:1px solid var(--proto-border);border-radius:var(--proto-radius);background:var(--proto-bg);color:var(--proto-text)";

pub fn render_form(node: &Node, _ctx: &mut RenderContext) -> String {
    match &node.kind {
        NodeKind::Input {
            kind,
            label,
            placeholder,
            disabled,
        } => {
            let mut control = format!(
                "<input{}{}",
                attr("type", kind.as_str()),
                attr("class", "proto-input")
            );
            if let Some(placeholder) = placeholder {
                control.push_str(&attr("placeholder", placeholder));
            }
            if *disabled {
                control.push_str(" disabled");
            }
            control.push_str(&attr("style", CONTROL_STYLE));
            control.push('>');
            field(node, label.as_deref(), &control)
        }
        NodeKind::Select { label, options } => {
            let options: String = options
                .iter()
                .map(|option| format!("<option>{}</option>", escape(option)))
                .collect();
            let control = format!(
                "<select class=\"proto-select\"{}>{}</select>",
                attr("style", CONTROL_STYLE),
                options
            );
            field(node, label.as_deref(), &control)
        }
        NodeKind::Checkbox { checked, label } => format!(
            "<label{}><input type=\"checkbox\"{}> {}</label>",
            node_attrs(&node.id, "proto-checkbox"),
            if *checked { " checked" } else { "" },
            escape(label)
        ),
        NodeKind::RadioGroup { options } => {
            let options: String = options
                .iter()
                .map(|option| {
                    format!(
                        "<label class=\"proto-radio\"><input type=\"radio\"{}{}> {}</label>",
                        attr("name", &node.id),
                        if option.selected { " checked" } else { "" },
                        escape(&option.label)
                    )
                })
                .collect();
            format!(
                "<div{} role=\"radiogroup\" style=\"display:flex;flex-direction:column;gap:0.25rem\">{}</div>",
                node_attrs(&node.id, "proto-radio-group"),
                options
            )
        }
        _ => String::new(),
    }
}

fn field(node: &Node, label: Option<&str>, control: &str) -> String {
    let label = label
        .filter(|label| !label.is_empty())
        .map(|label| format!("<span class=\"proto-label\">{}</span>", escape(label)))
        .unwrap_or_default();
    format!(
        "<label{}{}>{}{}</label>",
        node_attrs(&node.id, "proto-field"),
        attr("style", FIELD_STYLE),
        label,
        control
    )
}
