//! Route metadata: what a document offers to navigate to, plus the navigation state

use proto_parser::{Document, Node, NodeKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenRoute {
    pub id: String,
    pub name: String,
    pub is_default: bool,
    /// Position among the document's screens
    pub index: usize,
}

/// A modal, drawer or component definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRoute {
    pub id: String,
    pub name: String,
}

impl NamedRoute {
    fn from_node(node: &Node) -> Option<Self> {
        Some(Self {
            id: node.id.clone(),
            name: node.name()?.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    pub screens: Vec<ScreenRoute>,
    pub modals: Vec<NamedRoute>,
    pub drawers: Vec<NamedRoute>,
    pub components: Vec<NamedRoute>,
    pub default_screen: Option<String>,
    pub current_screen: Option<String>,
    pub total_routes: usize,
    pub navigation_history: Vec<String>,
    pub current_history_index: Option<usize>,
    pub can_navigate_back: bool,
    pub can_navigate_forward: bool,
    pub open_overlays: Vec<String>,
}

impl RouteMetadata {
    /// Bucket the top level declarations. Navigation state is left empty.
    pub fn from_document(document: &Document) -> Self {
        let mut metadata = RouteMetadata::default();

        for node in &document.children {
            match &node.kind {
                NodeKind::Screen { name, .. } => {
                    let index = metadata.screens.len();
                    metadata.screens.push(ScreenRoute {
                        id: node.id.clone(),
                        name: name.clone(),
                        is_default: false,
                        index,
                    });
                }
                NodeKind::Modal { .. } => metadata.modals.extend(NamedRoute::from_node(node)),
                NodeKind::Drawer { .. } => metadata.drawers.extend(NamedRoute::from_node(node)),
                NodeKind::ComponentDef { .. } => {
                    metadata.components.extend(NamedRoute::from_node(node))
                }
                _ => {}
            }
        }

        metadata.default_screen = document.default_screen().map(str::to_string);
        if let Some(default) = &metadata.default_screen {
            // Names are unique after building, but a hand-made document may repeat one
            if let Some(screen) = metadata.screens.iter_mut().find(|s| &s.name == default) {
                screen.is_default = true;
            }
        }
        metadata.total_routes = metadata.screens.len()
            + metadata.modals.len()
            + metadata.drawers.len()
            + metadata.components.len();
        metadata
    }

    pub fn has_screen(&self, name: &str) -> bool {
        self.screens.iter().any(|screen| screen.name == name)
    }

    pub fn has_overlay(&self, name: &str) -> bool {
        self.modals
            .iter()
            .chain(&self.drawers)
            .any(|overlay| overlay.name == name)
    }
}
