//! # Tree Selectors
//!
//! Read-only queries over a blueprint tree. Selectors never fail: a missing
//! id yields `None`, `false`, or an empty slice.

use std::sync::Arc;

use crate::layout::{FooterColumn, Layout, SlotName};
use crate::node::{Node, NodeType};

/// Location of a node relative to the root
///
/// `id_path` runs from the root to the node inclusive. `index_path[i]` is
/// the position of `id_path[i + 1]` within its parent's children, so it is
/// one shorter than `id_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    pub id_path: Vec<String>,
    pub index_path: Vec<usize>,
}

impl NodePath {
    pub fn parent_id(&self) -> Option<&str> {
        let len = self.id_path.len();
        if len < 2 {
            return None;
        }
        Some(&self.id_path[len - 2])
    }

    /// Position of the node within its parent
    pub fn index(&self) -> Option<usize> {
        self.index_path.last().copied()
    }
}

/// Depth-first search for the first node with `id`
pub fn select_node_by_id<'a>(root: &'a Node, id: &str) -> Option<&'a Node> {
    if root.id == id {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| select_node_by_id(child, id))
}

pub fn select_path(root: &Node, id: &str) -> Option<NodePath> {
    let mut path = NodePath {
        id_path: Vec::new(),
        index_path: Vec::new(),
    };
    if build_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn build_path(node: &Node, id: &str, path: &mut NodePath) -> bool {
    path.id_path.push(node.id.clone());
    if node.id == id {
        return true;
    }

    for (index, child) in node.children.iter().enumerate() {
        path.index_path.push(index);
        if build_path(child, id, path) {
            return true;
        }
        path.index_path.pop();
    }

    path.id_path.pop();
    false
}

pub fn select_path_ids(root: &Node, id: &str) -> Option<Vec<String>> {
    select_path(root, id).map(|path| path.id_path)
}

pub fn select_path_nodes<'a>(root: &'a Node, id: &str) -> Option<Vec<&'a Node>> {
    let path = select_path(root, id)?;
    let mut nodes = vec![root];
    let mut current = root;
    for &index in &path.index_path {
        current = current.children[index].as_ref();
        nodes.push(current);
    }
    Some(nodes)
}

pub fn select_parent<'a>(root: &'a Node, id: &str) -> Option<&'a Node> {
    let nodes = select_path_nodes(root, id)?;
    let len = nodes.len();
    if len < 2 {
        return None;
    }
    Some(nodes[len - 2])
}

pub fn select_children_or_empty<'a>(root: &'a Node, id: &str) -> &'a [Arc<Node>] {
    select_node_by_id(root, id)
        .map(|node| node.children.as_slice())
        .unwrap_or(&[])
}

/// True iff `ancestor_id` is strictly above `node_id`
pub fn is_ancestor(root: &Node, ancestor_id: &str, node_id: &str) -> bool {
    match select_path_ids(root, node_id) {
        Some(ids) => ids[..ids.len() - 1].iter().any(|id| id == ancestor_id),
        None => false,
    }
}

pub fn select_header_slot<'a>(root: &'a Node, header_id: &str, slot: SlotName) -> &'a [String] {
    match select_node_by_id(root, header_id) {
        Some(node) if node.node_type == NodeType::Header => match &node.layout {
            Layout::Slots(slots) => slots.get(slot),
            _ => &[],
        },
        _ => &[],
    }
}

pub fn select_footer_columns<'a>(root: &'a Node, footer_id: &str) -> &'a [FooterColumn] {
    match select_node_by_id(root, footer_id) {
        Some(node) if node.node_type == NodeType::Footer => match &node.layout {
            Layout::FooterColumns(columns) => columns,
            _ => &[],
        },
        _ => &[],
    }
}

/// Every id in pre-order, duplicates included
pub fn collect_ids(root: &Node) -> Vec<String> {
    let mut ids = Vec::new();
    root.walk(&mut |node| ids.push(node.id.clone()));
    ids
}
