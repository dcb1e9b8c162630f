//! Layout containers
//!
//! Each layout type starts from a preset (flex direction, grid, card chrome); modifiers add
//! classes (`proto-gap-4`, `proto-justify-center`) and the inline styles that implement them.
//! Numeric sizes are spacing units of a quarter rem; `full`, `auto`, `screen` and `fit` are
//! keywords; anything with a unit (`50%`, `12px`) passes through.

use super::markup::{attr, node_attrs};
use super::{render_children, RenderContext};
use proto_parser::proto::ast::{Align, Justify, LayoutType, Modifiers};
use proto_parser::{Node, NodeKind};

pub fn render_layout(node: &Node, ctx: &mut RenderContext) -> String {
    let NodeKind::Layout {
        layout_type,
        modifiers,
    } = &node.kind
    else {
        return String::new();
    };

    let (classes, style) = layout_styles(*layout_type, modifiers);
    let tag = match layout_type {
        LayoutType::Header => "header",
        _ => "div",
    };
    format!(
        "<{tag}{}{}>{}</{tag}>",
        node_attrs(&node.id, &classes),
        attr("style", &style),
        render_children(&node.children, ctx),
    )
}

fn preset(layout_type: LayoutType) -> &'static str {
    match layout_type {
        LayoutType::Container | LayoutType::Col => "display:flex;flex-direction:column",
        LayoutType::Row => "display:flex;flex-direction:row;flex-wrap:wrap",
        LayoutType::Grid => "display:grid",
        LayoutType::Card => {
            "display:flex;flex-direction:column;background:var(--proto-surface);border:1px solid var(--proto-border);border-radius:var(--proto-radius)"
        }
        LayoutType::Header => {
            "display:flex;flex-direction:row;align-items:center;justify-content:space-between;border-bottom:1px solid var(--proto-border)"
        }
    }
}

/// Classes and inline style for a layout
pub fn layout_styles(layout_type: LayoutType, modifiers: &Modifiers) -> (String, String) {
    let mut classes = vec![format!("proto-{}", layout_type)];
    let mut style = vec![preset(layout_type).to_string()];

    let sized: [(&str, &Option<String>, &[&str]); 7] = [
        ("w", &modifiers.w, &["width"]),
        ("h", &modifiers.h, &["height"]),
        ("p", &modifiers.p, &["padding"]),
        ("m", &modifiers.m, &["margin"]),
        ("px", &modifiers.px, &["padding-left", "padding-right"]),
        ("py", &modifiers.py, &["padding-top", "padding-bottom"]),
        ("gap", &modifiers.gap, &["gap"]),
    ];
    for (key, value, properties) in sized {
        if let Some(value) = value {
            classes.push(format!("proto-{}-{}", key, value));
            let length = length(value, key == "h");
            for property in properties {
                style.push(format!("{}:{}", property, length));
            }
        }
    }

    if layout_type == LayoutType::Card && modifiers.p.is_none() {
        style.push("padding:1rem".to_string());
    }

    if layout_type == LayoutType::Grid || modifiers.cols.is_some() {
        let cols = modifiers.cols.as_deref().unwrap_or("2");
        if modifiers.cols.is_some() {
            classes.push(format!("proto-cols-{}", cols));
        }
        let count = cols.parse::<usize>().unwrap_or(2).max(1);
        if layout_type != LayoutType::Grid {
            style.push("display:grid".to_string());
        }
        style.push(format!(
            "grid-template-columns:repeat({},minmax(0,1fr))",
            count
        ));
    }

    if let Some(justify) = modifiers.justify {
        classes.push(format!("proto-justify-{}", justify.as_str()));
        style.push(format!("justify-content:{}", justify_value(justify)));
    }
    if let Some(align) = modifiers.align {
        classes.push(format!("proto-align-{}", align.as_str()));
        style.push(format!("align-items:{}", align_value(align)));
    }

    (classes.join(" "), style.join(";"))
}

/// CSS length for a modifier value
fn length(value: &str, vertical: bool) -> String {
    match value {
        "full" => "100%".to_string(),
        "auto" => "auto".to_string(),
        "fit" => "fit-content".to_string(),
        "screen" if vertical => "100vh".to_string(),
        "screen" => "100vw".to_string(),
        _ => match value.parse::<f64>() {
            Ok(units) => format!("{}rem", units * 0.25),
            Err(_) => value.to_string(),
        },
    }
}

fn justify_value(justify: Justify) -> &'static str {
    match justify {
        Justify::Left => "flex-start",
        Justify::Center => "center",
        Justify::Right => "flex-end",
        Justify::Between => "space-between",
        Justify::Around => "space-around",
        Justify::Evenly => "space-evenly",
    }
}

fn align_value(align: Align) -> &'static str {
    match align {
        Align::Top => "flex-start",
        Align::Middle => "center",
        Align::Bottom => "flex-end",
        Align::Stretch => "stretch",
    }
}
