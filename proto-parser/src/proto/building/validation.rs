//! Document level semantic checks
//!
//! - names are unique within their category (screens, modals, drawers, components); later
//!   duplicates are reported and dropped
//! - at most one screen is flagged `(default)`; later flags are reported and cleared
//! - when screens exist, exactly one is the default: the flagged one, otherwise the first

use super::error::BuildError;
use crate::proto::ast::range::Range;
use crate::proto::ast::{Document, Node, NodeKind};
use std::collections::HashMap;

fn category(node: &Node) -> Option<&'static str> {
    match node.kind {
        NodeKind::Screen { .. } => Some("screen"),
        NodeKind::Modal { .. } => Some("modal"),
        NodeKind::Drawer { .. } => Some("drawer"),
        NodeKind::ComponentDef { .. } => Some("component"),
        _ => None,
    }
}

/// Check and normalize a freshly built document in place.
pub fn validate(document: &mut Document) -> Vec<BuildError> {
    let mut errors = Vec::new();
    drop_duplicates(document, &mut errors);
    settle_default_screen(document, &mut errors);
    errors
}

fn drop_duplicates(document: &mut Document, errors: &mut Vec<BuildError>) {
    let mut seen: HashMap<(&'static str, String), Range> = HashMap::new();
    let children = std::mem::take(&mut document.children);

    for node in children {
        if let (Some(category), Some(name)) = (category(&node), node.name()) {
            let key = (category, name.to_string());
            if let Some(first) = seen.get(&key) {
                errors.push(BuildError::DuplicateName {
                    category,
                    name: name.to_string(),
                    first: first.clone(),
                    range: node.range.clone(),
                });
                continue;
            }
            seen.insert(key, node.range.clone());
        }
        document.children.push(node);
    }
}

fn settle_default_screen(document: &mut Document, errors: &mut Vec<BuildError>) {
    let mut first_default: Option<String> = None;

    for node in document.children.iter_mut() {
        if let NodeKind::Screen { name, is_default } = &mut node.kind {
            if !*is_default {
                continue;
            }
            match &first_default {
                None => first_default = Some(name.clone()),
                Some(first) => {
                    errors.push(BuildError::MultipleDefaults {
                        name: name.clone(),
                        first: first.clone(),
                        range: node.range.clone(),
                    });
                    *is_default = false;
                }
            }
        }
    }

    if first_default.is_none() {
        if let Some(NodeKind::Screen { is_default, .. }) = document
            .children
            .iter_mut()
            .map(|node| &mut node.kind)
            .find(|kind| matches!(kind, NodeKind::Screen { .. }))
        {
            *is_default = true;
        }
    }
}
