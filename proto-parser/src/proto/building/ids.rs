//! Deterministic node ids
//!
//! Fresh ids are derived from structural position: `<tag>-<path>`, where the path lists the
//! child index at every level from the top (`button-0-1` is the second child of the first
//! declaration). Compiling the same text twice yields the same ids.
//!
//! Reconciliation
//!
//!     When the previous document is supplied, its nodes are flattened into an arena indexed
//!     two ways: by (parent id, position) and by (parent id, content signature). The new tree
//!     is then walked depth-first, parents before children, and each sibling list is matched
//!     in two rounds:
//!
//!         1. same position under the same parent, same kind: reuse the id
//!         2. among the previous siblings still unmatched, same content signature: reuse the id
//!
//!     Everything left gets a fresh id. Because children are looked up under their parent's
//!     final id, a matched parent carries its old subtree with it. A fresh id that collides
//!     with one already handed out gets a `_2`, `_3`, ... suffix.
//!
//!     The content signature hashes the node's own data (not its children), so an edited
//!     heading moves to a new id while a moved, unchanged heading keeps its old one.

use crate::proto::ast::{Document, Node};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// Assign ids to every node of `document`, reusing ids from `previous` where nodes match.
pub fn assign_ids(document: &mut Document, previous: Option<&Document>) {
    let arena = previous.map(Arena::from_document).unwrap_or_default();
    let mut reconciler = Reconciler {
        arena,
        used: HashSet::new(),
    };
    reconciler.assign(&mut document.children, "", &[]);
}

/// Hash of a node's own data, children excluded
pub fn content_signature(node: &Node) -> u64 {
    let mut hasher = DefaultHasher::new();
    // Serializing plain data can't fail; an empty string still yields a usable signature
    serde_json::to_string(&node.kind)
        .unwrap_or_default()
        .hash(&mut hasher);
    hasher.finish()
}

struct ArenaEntry {
    id: String,
    tag: &'static str,
    claimed: bool,
}

#[derive(Default)]
struct Arena {
    entries: Vec<ArenaEntry>,
    by_position: HashMap<(String, usize), usize>,
    by_signature: HashMap<(String, u64), Vec<usize>>,
}

impl Arena {
    fn from_document(document: &Document) -> Self {
        let mut arena = Arena::default();
        arena.insert_children(&document.children, "");
        arena
    }

    fn insert_children(&mut self, children: &[Node], parent_id: &str) {
        for (position, node) in children.iter().enumerate() {
            let index = self.entries.len();
            self.entries.push(ArenaEntry {
                id: node.id.clone(),
                tag: node.kind.tag(),
                claimed: false,
            });
            self.by_position
                .insert((parent_id.to_string(), position), index);
            self.by_signature
                .entry((parent_id.to_string(), content_signature(node)))
                .or_default()
                .push(index);
            self.insert_children(&node.children, &node.id);
        }
    }

    fn claim_positional(&mut self, parent_id: &str, position: usize, tag: &str) -> Option<String> {
        let index = *self.by_position.get(&(parent_id.to_string(), position))?;
        let entry = &mut self.entries[index];
        if entry.claimed || entry.tag != tag || entry.id.is_empty() {
            return None;
        }
        entry.claimed = true;
        Some(entry.id.clone())
    }

    fn claim_by_content(&mut self, parent_id: &str, signature: u64) -> Option<String> {
        let candidates = self.by_signature.get(&(parent_id.to_string(), signature))?;
        let index = candidates
            .iter()
            .copied()
            .find(|&index| !self.entries[index].claimed && !self.entries[index].id.is_empty())?;
        let entry = &mut self.entries[index];
        entry.claimed = true;
        Some(entry.id.clone())
    }
}

struct Reconciler {
    arena: Arena,
    used: HashSet<String>,
}

impl Reconciler {
    fn assign(&mut self, children: &mut [Node], parent_id: &str, path: &[usize]) {
        let mut assigned: Vec<Option<String>> = vec![None; children.len()];

        for (position, node) in children.iter().enumerate() {
            assigned[position] = self
                .arena
                .claim_positional(parent_id, position, node.kind.tag())
                .filter(|id| !self.used.contains(id));
        }

        for (position, node) in children.iter().enumerate() {
            if assigned[position].is_none() {
                assigned[position] = self
                    .arena
                    .claim_by_content(parent_id, content_signature(node))
                    .filter(|id| !self.used.contains(id));
            }
        }

        for (position, node) in children.iter_mut().enumerate() {
            let mut child_path = path.to_vec();
            child_path.push(position);

            let id = match assigned[position].take() {
                Some(id) => id,
                None => self.fresh_id(node, &child_path),
            };
            self.used.insert(id.clone());
            node.id = id;

            let id = node.id.clone();
            self.assign(&mut node.children, &id, &child_path);
        }
    }

    fn fresh_id(&self, node: &Node, path: &[usize]) -> String {
        let path: Vec<String> = path.iter().map(|index| index.to_string()).collect();
        let base = format!("{}-{}", node.kind.tag(), path.join("-"));
        if !self.used.contains(&base) {
            return base;
        }
        (2..)
            .map(|suffix| format!("{}_{}", base, suffix))
            .find(|candidate| !self.used.contains(candidate))
            .unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::ast::range::Range;
    use crate::proto::ast::{NodeKind, TextVariant};

    fn text(content: &str) -> Node {
        Node::new(
            NodeKind::Text {
                variant: TextVariant::Paragraph,
                content: content.into(),
            },
            Range::default(),
        )
    }

    fn screen(name: &str, children: Vec<Node>) -> Node {
        Node::new(
            NodeKind::Screen {
                name: name.into(),
                is_default: false,
            },
            Range::default(),
        )
        .with_children(children)
    }

    fn ids(document: &Document) -> Vec<String> {
        document.walk().iter().map(|node| node.id.clone()).collect()
    }

    #[test]
    fn test_fresh_ids_follow_position() {
        let mut document =
            Document::with_children(vec![screen("A", vec![text("one"), text("two")])]);
        assign_ids(&mut document, None);
        assert_eq!(ids(&document), vec!["screen-0", "text-0-0", "text-0-1"]);
    }

    #[test]
    fn test_appending_keeps_existing_ids() {
        let mut first = Document::with_children(vec![screen("A", vec![text("one")])]);
        assign_ids(&mut first, None);

        let mut second =
            Document::with_children(vec![screen("A", vec![text("one"), text("two")])]);
        assign_ids(&mut second, Some(&first));

        assert_eq!(ids(&second)[..2], ids(&first)[..]);
    }

    #[test]
    fn test_moved_node_keeps_id_by_content() {
        let mut first = Document::with_children(vec![screen(
            "A",
            vec![
                Node::new(NodeKind::Separator, Range::default()),
                text("kept"),
            ],
        )]);
        assign_ids(&mut first, None);
        let kept_id = first.children[0].children[1].id.clone();

        // The separator is removed, the text moves up one slot
        let mut second = Document::with_children(vec![screen("A", vec![text("kept")])]);
        assign_ids(&mut second, Some(&first));

        assert_eq!(second.children[0].children[0].id, kept_id);
    }

    #[test]
    fn test_ids_are_unique_after_reconciliation() {
        let mut first = Document::with_children(vec![screen("A", vec![text("x")])]);
        assign_ids(&mut first, None);

        // A new text at position 0 pushes the old one (matched by content) down
        let mut second = Document::with_children(vec![screen("A", vec![text("new"), text("x")])]);
        assign_ids(&mut second, Some(&first));

        let all = ids(&second);
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}
