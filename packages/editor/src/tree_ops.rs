//! # Tree Edits
//!
//! Copy-on-write editing of the node tree. Every edit descends from the root
//! with [`Arc::make_mut`], so only the nodes on the path to the change are
//! copied; all other subtrees stay shared with the previous snapshot.
//!
//! ## Reference upkeep
//!
//! When a child enters or leaves a parent that renders through `content`,
//! `slots` or `columns`, the reference structure is updated in the same step:
//!
//! - content parent: the id is placed before its following sibling
//! - header: the first empty slot (`logo`, then `right`)
//! - footer / row: the column of the following sibling, else the last column;
//!   a row without columns gets a full-width one, a footer without columns
//!   rejects the insert
//!
//! Removal strips the id from every bucket of the parent.

use std::collections::HashSet;
use std::sync::Arc;

use blueprint_model::{
    collect_ids, generate_node_id, is_ancestor, select_node_by_id, select_path, Layout, Node,
    NodePath, NodeType, RowColumn, SlotName, Styles,
};
use serde_json::{Map, Value};

use crate::errors::{EditorError, EditorResult};

pub(crate) fn locate(root: &Node, id: &str) -> EditorResult<NodePath> {
    select_path(root, id).ok_or_else(|| EditorError::NodeNotFound(id.to_string()))
}

/// Mutable access to the node at `index_path`, unsharing every node on the way
pub(crate) fn node_at_mut<'a>(root: &'a mut Arc<Node>, index_path: &[usize]) -> &'a mut Node {
    let mut node = Arc::make_mut(root);
    for &index in index_path {
        node = Arc::make_mut(&mut node.children[index]);
    }
    node
}

pub(crate) fn node_mut<'a>(root: &'a mut Arc<Node>, id: &str) -> EditorResult<&'a mut Node> {
    let path = locate(&**root, id)?;
    Ok(node_at_mut(root, &path.index_path))
}

fn parent_mut<'a>(root: &'a mut Arc<Node>, id: &str) -> EditorResult<&'a mut Node> {
    let path = select_path(&**root, id).ok_or_else(|| EditorError::ParentNotFound(id.to_string()))?;
    Ok(node_at_mut(root, &path.index_path))
}

pub(crate) fn check_index(id: &str, index: usize, len: usize) -> EditorResult<()> {
    if index >= len {
        return Err(EditorError::IndexOutOfBounds {
            id: id.to_string(),
            index,
            len,
        });
    }
    Ok(())
}

fn ensure_can_hold(parent: &Node) -> EditorResult<()> {
    if parent.node_type.is_leaf() {
        return Err(EditorError::LeafParent {
            id: parent.id.clone(),
            node_type: parent.node_type,
        });
    }
    Ok(())
}

/// A subtree about to enter the tree must bring only new, non-empty ids
pub(crate) fn check_new_subtree(root: &Node, node: &Node) -> EditorResult<()> {
    if node.id.trim().is_empty() {
        return Err(EditorError::MalformedNode(format!(
            "'{}' node is missing an id",
            node.node_type
        )));
    }

    let existing: HashSet<String> = collect_ids(root).into_iter().collect();
    let mut incoming = HashSet::new();
    for id in collect_ids(node) {
        if id.trim().is_empty() {
            return Err(EditorError::MalformedNode(format!(
                "subtree of {} contains a node without an id",
                node.id
            )));
        }
        if existing.contains(&id) || !incoming.insert(id.clone()) {
            return Err(EditorError::DuplicateId(id));
        }
    }
    Ok(())
}

fn insert_before(ids: &mut Vec<String>, id: &str, next: Option<&str>) {
    let at = next
        .and_then(|n| ids.iter().position(|r| r == n))
        .unwrap_or(ids.len());
    ids.insert(at, id.to_string());
}

fn place_in_columns(mut lists: Vec<&mut Vec<String>>, id: &str, next: Option<&str>) -> bool {
    let target = next.and_then(|n| lists.iter().position(|ids| ids.iter().any(|r| r == n)));
    match target {
        Some(i) => insert_before(&mut *lists[i], id, next),
        None => match lists.last_mut() {
            Some(ids) => ids.push(id.to_string()),
            None => return false,
        },
    }
    true
}

/// Reference the child that was just inserted at `index` of `parent.children`
pub(crate) fn insert_ref(parent: &mut Node, id: &str, index: usize) -> EditorResult<()> {
    let next = parent.children.get(index + 1).map(|c| c.id.clone());
    let next = next.as_deref();

    match &mut parent.layout {
        Layout::None => {}
        Layout::Content(ids) => insert_before(ids, id, next),
        Layout::Slots(slots) => {
            let slot = SlotName::ALL
                .into_iter()
                .find(|slot| slots.get(*slot).is_empty())
                .ok_or_else(|| EditorError::SlotsFull(parent.id.clone()))?;
            slots.get_mut(slot).push(id.to_string());
        }
        Layout::FooterColumns(columns) => {
            let lists = columns.iter_mut().map(|c| &mut c.content).collect();
            if !place_in_columns(lists, id, next) {
                return Err(EditorError::NoColumns(parent.id.clone()));
            }
        }
        Layout::RowColumns(columns) => {
            if columns.is_empty() {
                columns.push(RowColumn::full_width());
            }
            let lists = columns.iter_mut().map(|c| &mut c.content).collect();
            place_in_columns(lists, id, next);
        }
    }
    Ok(())
}

/// Insert `child` under `parent` (clamped index, default end) and reference it
fn insert_child(parent: &mut Node, index: Option<usize>, child: Arc<Node>) -> EditorResult<()> {
    ensure_can_hold(parent)?;
    let len = parent.children.len();
    let index = index.unwrap_or(len).min(len);
    let id = child.id.clone();
    parent.children.insert(index, child);
    insert_ref(parent, &id, index)
}

/// Unlink the node with `id` from its parent, references included
pub(crate) fn detach(root: &mut Arc<Node>, id: &str) -> EditorResult<Arc<Node>> {
    let path = locate(&**root, id)?;
    let Some((&index, parent_path)) = path.index_path.split_last() else {
        return Err(EditorError::CannotRemoveRoot);
    };
    let parent = node_at_mut(root, parent_path);
    let child = parent.children.remove(index);
    parent.layout.remove_ref(id);
    Ok(child)
}

pub fn add_component(
    root: &mut Arc<Node>,
    parent_id: &str,
    node: &Node,
    index: Option<usize>,
) -> EditorResult<()> {
    check_new_subtree(root, node)?;
    let parent = parent_mut(root, parent_id)?;
    insert_child(parent, index, Arc::new(node.clone()))
}

/// Shallow merge: top-level keys of `patch` replace those of the payload
pub fn update_data(root: &mut Arc<Node>, node_id: &str, patch: &Map<String, Value>) -> EditorResult<()> {
    let node = node_mut(root, node_id)?;
    node.data = node
        .data
        .merged(node.node_type, patch)
        .map_err(|e| EditorError::InvalidData {
            id: node_id.to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

pub fn update_styles(root: &mut Arc<Node>, node_id: &str, patch: &Styles) -> EditorResult<()> {
    let node = node_mut(root, node_id)?;
    for (key, value) in patch {
        node.styles.insert(key.clone(), value.clone());
    }
    Ok(())
}

pub fn reorder(root: &mut Arc<Node>, parent_id: &str, from: usize, to: usize) -> EditorResult<()> {
    let parent = parent_mut(root, parent_id)?;
    let len = parent.children.len();
    check_index(parent_id, from, len)?;
    check_index(parent_id, to, len)?;

    let child = parent.children.remove(from);
    let id = child.id.clone();
    parent.children.insert(to, child);

    // Columns and slots are unordered relative to children; content is not
    let next = parent.children.get(to + 1).map(|c| c.id.clone());
    if let Layout::Content(ids) = &mut parent.layout {
        if let Some(pos) = ids.iter().position(|r| *r == id) {
            ids.remove(pos);
            insert_before(ids, &id, next.as_deref());
        }
    }
    Ok(())
}

pub fn move_node(
    root: &mut Arc<Node>,
    from_parent_id: &str,
    from_index: usize,
    to_parent_id: &str,
    to_index: usize,
) -> EditorResult<()> {
    let from_parent = select_node_by_id(root, from_parent_id)
        .ok_or_else(|| EditorError::ParentNotFound(from_parent_id.to_string()))?;
    let len = from_parent.children.len();
    check_index(from_parent_id, from_index, len)?;
    let node_id = from_parent.children[from_index].id.clone();

    if from_parent_id == to_parent_id {
        return reorder(root, from_parent_id, from_index, to_index.min(len - 1));
    }

    let to_parent = select_node_by_id(root, to_parent_id)
        .ok_or_else(|| EditorError::ParentNotFound(to_parent_id.to_string()))?;
    ensure_can_hold(to_parent)?;
    if node_id == to_parent_id || is_ancestor(root, &node_id, to_parent_id) {
        return Err(EditorError::CycleDetected {
            node: node_id,
            target: to_parent_id.to_string(),
        });
    }

    let child = detach(root, &node_id)?;
    let parent = parent_mut(root, to_parent_id)?;
    insert_child(parent, Some(to_index), child)
}

/// Replace `node_id` with a fresh `container_type` node holding it; returns the wrapper id
pub fn wrap_in_container(
    root: &mut Arc<Node>,
    node_id: &str,
    container_type: NodeType,
) -> EditorResult<String> {
    if !container_type.is_container() {
        return Err(EditorError::InvalidContainerType(container_type));
    }
    let path = locate(root, node_id)?;
    let Some((&index, parent_path)) = path.index_path.split_last() else {
        return Err(EditorError::CannotWrapRoot);
    };

    let wrapper_id = generate_node_id(container_type.as_str());
    if select_node_by_id(root, &wrapper_id).is_some() {
        return Err(EditorError::DuplicateId(wrapper_id));
    }

    let parent = node_at_mut(root, parent_path);
    let mut wrapper = Node::new(container_type, wrapper_id.clone());
    // The original subtree moves as-is: same Arc, no copy
    wrapper.children.push(Arc::clone(&parent.children[index]));
    insert_ref(&mut wrapper, node_id, 0)?;

    parent.children[index] = Arc::new(wrapper);
    parent.layout.replace_ref(node_id, &wrapper_id);
    Ok(wrapper_id)
}

/// Drop `dragging_id` onto `target_id`: wrap the target, then place the dragged node beside it
pub fn wrap_and_move(
    root: &mut Arc<Node>,
    target_id: &str,
    dragging_id: &str,
    container_type: NodeType,
    to_index: Option<usize>,
) -> EditorResult<String> {
    if !container_type.is_container() {
        return Err(EditorError::InvalidContainerType(container_type));
    }
    locate(root, target_id)?;
    if target_id == dragging_id || is_ancestor(root, dragging_id, target_id) {
        return Err(EditorError::CycleDetected {
            node: dragging_id.to_string(),
            target: target_id.to_string(),
        });
    }

    let dragging = detach(root, dragging_id)?;
    let wrapper_id = wrap_in_container(root, target_id, container_type)?;
    let wrapper = node_mut(root, &wrapper_id)?;
    insert_child(wrapper, to_index, dragging)?;
    Ok(wrapper_id)
}

/// Delete a node and its subtree
pub fn remove(root: &mut Arc<Node>, node_id: &str) -> EditorResult<()> {
    if root.id == node_id {
        return Err(EditorError::CannotRemoveRoot);
    }
    detach(root, node_id).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_model::{FooterColumn, HeaderSlots};

    fn leaf(id: &str) -> Node {
        Node::new(NodeType::Divider, id)
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_ref_content_before_next_sibling() {
        let mut section = Node::new(NodeType::Section, "s")
            .with_layout(Layout::Content(ids(&["a", "b"])))
            .with_children([leaf("a"), leaf("b")]);
        insert_child(&mut section, Some(1), Arc::new(leaf("x"))).unwrap();
        assert_eq!(section.layout, Layout::Content(ids(&["a", "x", "b"])));
    }

    #[test]
    fn test_insert_ref_header_fills_free_slot() {
        let mut header = Node::new(NodeType::Header, "h").with_layout(Layout::Slots(HeaderSlots {
            logo: ids(&["a"]),
            right: vec![],
        }));
        header.children.push(Arc::new(leaf("a")));

        insert_child(&mut header, None, Arc::new(leaf("b"))).unwrap();
        assert_eq!(
            header.layout,
            Layout::Slots(HeaderSlots {
                logo: ids(&["a"]),
                right: ids(&["b"]),
            })
        );

        let err = insert_child(&mut header, None, Arc::new(leaf("c"))).unwrap_err();
        assert!(matches!(err, EditorError::SlotsFull(_)));
    }

    #[test]
    fn test_insert_ref_footer_joins_sibling_column() {
        let mut footer = Node::new(NodeType::Footer, "f")
            .with_layout(Layout::FooterColumns(vec![
                FooterColumn {
                    id: "c1".into(),
                    content: ids(&["a"]),
                },
                FooterColumn {
                    id: "c2".into(),
                    content: ids(&["b"]),
                },
            ]))
            .with_children([leaf("a"), leaf("b")]);

        insert_child(&mut footer, Some(0), Arc::new(leaf("x"))).unwrap();
        insert_child(&mut footer, None, Arc::new(leaf("y"))).unwrap();
        match &footer.layout {
            Layout::FooterColumns(columns) => {
                assert_eq!(columns[0].content, ids(&["x", "a"]));
                assert_eq!(columns[1].content, ids(&["b", "y"]));
            }
            other => panic!("unexpected layout: {:?}", other),
        }
    }

    #[test]
    fn test_insert_into_footer_without_columns_fails() {
        let mut footer = Node::new(NodeType::Footer, "f");
        let err = insert_child(&mut footer, None, Arc::new(leaf("x"))).unwrap_err();
        assert!(matches!(err, EditorError::NoColumns(_)));
    }

    #[test]
    fn test_row_gets_full_width_column() {
        let mut row = Node::new(NodeType::Row, "r");
        insert_child(&mut row, None, Arc::new(leaf("x"))).unwrap();
        assert_eq!(
            row.layout,
            Layout::RowColumns(vec![RowColumn {
                span: 12,
                offset: 0,
                content: ids(&["x"]),
            }])
        );
    }

    #[test]
    fn test_leaf_cannot_hold_children() {
        let mut heading = Node::new(NodeType::Heading, "h");
        let err = insert_child(&mut heading, None, Arc::new(leaf("x"))).unwrap_err();
        assert!(matches!(err, EditorError::LeafParent { .. }));
    }

    #[test]
    fn test_check_new_subtree() {
        let root = Node::new(NodeType::Page, "page").with_children([leaf("a")]);
        assert!(check_new_subtree(&root, &leaf("b")).is_ok());
        assert!(matches!(
            check_new_subtree(&root, &leaf("a")),
            Err(EditorError::DuplicateId(id)) if id == "a"
        ));
        assert!(matches!(
            check_new_subtree(&root, &leaf(" ")),
            Err(EditorError::MalformedNode(_))
        ));
        let twins = Node::new(NodeType::Container, "c").with_children([leaf("t"), leaf("t")]);
        assert!(matches!(
            check_new_subtree(&root, &twins),
            Err(EditorError::DuplicateId(id)) if id == "t"
        ));
    }

    #[test]
    fn test_node_at_mut_copies_only_the_path() {
        let left = Node::new(NodeType::Container, "left").with_children([leaf("a")]);
        let right = Node::new(NodeType::Container, "right").with_children([leaf("b")]);
        let original = Arc::new(Node::new(NodeType::Page, "page").with_children([left, right]));

        let mut edited = Arc::clone(&original);
        node_at_mut(&mut edited, &[0, 0]).id = "a2".into();

        assert_eq!(original.children[0].children[0].id, "a");
        assert_eq!(edited.children[0].children[0].id, "a2");
        assert!(!Arc::ptr_eq(&original, &edited));
        assert!(!Arc::ptr_eq(&original.children[0], &edited.children[0]));
        assert!(Arc::ptr_eq(&original.children[1], &edited.children[1]));
    }
}
