//! Document root
//!
//! The document holds the top level declarations in source order. Lookups by name are linear:
//! documents are small and the renderer builds its own index when it needs one.

use super::node::{Node, NodeKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn screens(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|node| node.is_screen())
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|node| node.is_overlay())
    }

    pub fn component_defs(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::ComponentDef { .. }))
    }

    pub fn find_screen(&self, name: &str) -> Option<&Node> {
        self.screens().find(|node| node.name() == Some(name))
    }

    pub fn find_component(&self, name: &str) -> Option<&Node> {
        self.component_defs().find(|node| node.name() == Some(name))
    }

    pub fn is_overlay_name(&self, name: &str) -> bool {
        self.overlays().any(|node| node.name() == Some(name))
    }

    /// Name of the default screen: the one flagged `(default)`, otherwise the first screen
    pub fn default_screen(&self) -> Option<&str> {
        self.screens()
            .find(|node| matches!(node.kind, NodeKind::Screen { is_default: true, .. }))
            .or_else(|| self.screens().next())
            .and_then(Node::name)
    }

    /// All nodes, depth-first in document order
    pub fn walk(&self) -> Vec<&Node> {
        self.children.iter().flat_map(Node::walk).collect()
    }

    /// Find a node anywhere in the tree by id
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.walk().into_iter().find(|node| node.id == id)
    }
}
