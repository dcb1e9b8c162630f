//! Component instantiation
//!
//!     A component definition is a template: its children may contain `%name` placeholders in
//!     any string, including nested attributes such as a button's action. Instantiating it
//!     means:
//!
//!         1. serialize the definition's children with serde_json
//!         2. collect the distinct placeholders in first-seen order
//!         3. bind them positionally to the instance's values (missing values become empty)
//!         4. replace, deserialize, and render the result like any other nodes
//!
//!     Instantiated nodes get their ids prefixed with the instance scope (the instance id, or
//!     the list id plus the row index), so `data-id` stays unique across repeated instances.
//!
//!     Templated lists do this once per data row. Definitions may instantiate other components;
//!     the nesting depth is bounded by `max_component_depth`, which also stops a component
//!     from including itself forever.

use super::markup::{attr, escape, node_attrs};
use super::{render_children, RenderContext};
use crate::error::RenderError;
use once_cell::sync::Lazy;
use proto_parser::proto::ast::Range;
use proto_parser::{Node, NodeKind};
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%([A-Za-z_][A-Za-z0-9_]*)").unwrap());

pub fn render_instance(node: &Node, ctx: &mut RenderContext) -> String {
    let NodeKind::ComponentInstance {
        component_name,
        template_values,
    } = &node.kind
    else {
        return String::new();
    };

    format!(
        "<div{}{}>{}</div>",
        node_attrs(&node.id, "proto-instance"),
        attr("data-component", component_name),
        instantiate(component_name, template_values, &node.id, &node.range, ctx)
    )
}

/// Render component `name` with `values` bound to its placeholders, under id prefix `scope`.
pub fn instantiate(
    name: &str,
    values: &[String],
    scope: &str,
    range: &Range,
    ctx: &mut RenderContext,
) -> String {
    let document = ctx.document;
    let Some(definition) = document.find_component(name) else {
        ctx.record(RenderError::MissingComponent {
            name: name.to_string(),
            range: range.clone(),
        });
        return placeholder(name, &format!("Missing component: {}", name));
    };

    let limit = ctx.options.max_component_depth;
    if ctx.component_stack.len() >= limit {
        ctx.record(RenderError::RecursionLimit {
            name: name.to_string(),
            limit,
            range: range.clone(),
        });
        return placeholder(name, &format!("Component nesting too deep: {}", name));
    }

    let mut children = match substitute(&definition.children, values) {
        Ok(children) => children,
        Err(error) => {
            log::error!("component {} could not be instantiated: {}", name, error);
            definition.children.clone()
        }
    };
    rescope(&mut children, scope);

    ctx.component_stack.push(name.to_string());
    let html = render_children(&children, ctx);
    ctx.component_stack.pop();
    html
}

fn placeholder(name: &str, message: &str) -> String {
    format!(
        "<div class=\"proto-error\"{}>{}</div>",
        attr("data-component", name),
        escape(message)
    )
}

fn rescope(nodes: &mut [Node], scope: &str) {
    for node in nodes {
        node.id = format!("{}/{}", scope, node.id);
        rescope(&mut node.children, scope);
    }
}

/// Distinct placeholder names in first-seen order
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(text) {
        let name = &captures[1];
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Copy `template` with every placeholder replaced by its positional value.
pub fn substitute(template: &[Node], values: &[String]) -> Result<Vec<Node>, serde_json::Error> {
    let json = serde_json::to_string(template)?;

    let mut bindings: HashMap<String, String> = HashMap::new();
    for (index, name) in placeholder_names(&json).into_iter().enumerate() {
        let value = values.get(index).map(String::as_str).unwrap_or("");
        bindings.insert(name, json_string_content(value)?);
    }

    let replaced = PLACEHOLDER.replace_all(&json, |captures: &Captures| {
        bindings
            .get(&captures[1])
            .cloned()
            .unwrap_or_else(|| captures[0].to_string())
    });
    serde_json::from_str(&replaced)
}

/// `value` escaped for use inside a json string literal
fn json_string_content(value: &str) -> Result<String, serde_json::Error> {
    let quoted = serde_json::to_string(value)?;
    Ok(quoted[1..quoted.len() - 1].to_string())
}
