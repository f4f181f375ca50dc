//! Header slot and footer column edits.
//!
//! Both keep the owner's reference structure and its `children` in lockstep:
//! a node enters the tree together with its slot/column entry and leaves it
//! the same way.

use std::sync::Arc;

use blueprint_model::{generate_node_id, FooterColumn, HeaderSlots, Layout, Node, NodeType, SlotName};

use crate::errors::{EditorError, EditorResult};
use crate::tree_ops::{check_index, check_new_subtree, node_mut};

type Children = Vec<Arc<Node>>;

fn header_parts<'a>(
    root: &'a mut Arc<Node>,
    header_id: &str,
) -> EditorResult<(&'a mut HeaderSlots, &'a mut Children)> {
    match node_mut(root, header_id)? {
        Node {
            node_type: NodeType::Header,
            layout: Layout::Slots(slots),
            children,
            ..
        } => Ok((slots, children)),
        _ => Err(EditorError::NotAHeader(header_id.to_string())),
    }
}

fn footer_parts<'a>(
    root: &'a mut Arc<Node>,
    footer_id: &str,
) -> EditorResult<(&'a mut Vec<FooterColumn>, &'a mut Children)> {
    match node_mut(root, footer_id)? {
        Node {
            node_type: NodeType::Footer,
            layout: Layout::FooterColumns(columns),
            children,
            ..
        } => Ok((columns, children)),
        _ => Err(EditorError::NotAFooter(footer_id.to_string())),
    }
}

fn find_column<'a>(
    columns: &'a mut [FooterColumn],
    footer_id: &str,
    column_id: &str,
) -> EditorResult<&'a mut FooterColumn> {
    columns
        .iter_mut()
        .find(|c| c.id == column_id)
        .ok_or_else(|| EditorError::ColumnNotFound {
            owner: footer_id.to_string(),
            column: column_id.to_string(),
        })
}

/// Put `node` in `slot`, evicting whatever occupied it
pub fn add_to_header_slot(
    root: &mut Arc<Node>,
    header_id: &str,
    slot: SlotName,
    node: &Node,
) -> EditorResult<()> {
    check_new_subtree(root, node)?;
    let (slots, children) = header_parts(root, header_id)?;

    let evicted = std::mem::replace(slots.get_mut(slot), vec![node.id.clone()]);
    children.retain(|child| !evicted.contains(&child.id));
    children.push(Arc::new(node.clone()));
    Ok(())
}

pub fn remove_from_header_slot(
    root: &mut Arc<Node>,
    header_id: &str,
    slot: SlotName,
    node_id: &str,
) -> EditorResult<()> {
    let (slots, children) = header_parts(root, header_id)?;
    let ids = slots.get_mut(slot);
    if !ids.iter().any(|id| id == node_id) {
        return Err(EditorError::NotInSlot {
            slot,
            id: node_id.to_string(),
        });
    }
    ids.retain(|id| id != node_id);
    children.retain(|child| child.id != node_id);
    Ok(())
}

/// Append a column; returns its id
pub fn add_footer_column(
    root: &mut Arc<Node>,
    footer_id: &str,
    column_id: Option<&str>,
) -> EditorResult<String> {
    let id = column_id
        .map(str::to_string)
        .unwrap_or_else(|| generate_node_id("col"));
    if id.trim().is_empty() {
        return Err(EditorError::MalformedNode("column id must be non-empty".to_string()));
    }

    let (columns, _) = footer_parts(root, footer_id)?;
    if columns.iter().any(|c| c.id == id) {
        return Err(EditorError::DuplicateColumn(id));
    }
    columns.push(FooterColumn::new(id.clone()));
    Ok(id)
}

/// Drop a column and every node it referenced
pub fn remove_footer_column(root: &mut Arc<Node>, footer_id: &str, column_id: &str) -> EditorResult<()> {
    let (columns, children) = footer_parts(root, footer_id)?;
    let index = columns
        .iter()
        .position(|c| c.id == column_id)
        .ok_or_else(|| EditorError::ColumnNotFound {
            owner: footer_id.to_string(),
            column: column_id.to_string(),
        })?;

    let column = columns.remove(index);
    children.retain(|child| !column.content.contains(&child.id));
    Ok(())
}

pub fn add_to_footer_column(
    root: &mut Arc<Node>,
    footer_id: &str,
    column_id: &str,
    node: &Node,
    index: Option<usize>,
) -> EditorResult<()> {
    check_new_subtree(root, node)?;
    let (columns, children) = footer_parts(root, footer_id)?;
    let column = find_column(columns, footer_id, column_id)?;

    let len = column.content.len();
    column.content.insert(index.unwrap_or(len).min(len), node.id.clone());
    children.push(Arc::new(node.clone()));
    Ok(())
}

pub fn reorder_footer_column(
    root: &mut Arc<Node>,
    footer_id: &str,
    column_id: &str,
    from: usize,
    to: usize,
) -> EditorResult<()> {
    let (columns, _) = footer_parts(root, footer_id)?;
    let column = find_column(columns, footer_id, column_id)?;

    let len = column.content.len();
    check_index(column_id, from, len)?;
    check_index(column_id, to, len)?;
    let id = column.content.remove(from);
    column.content.insert(to, id);
    Ok(())
}

pub fn remove_from_footer_column(
    root: &mut Arc<Node>,
    footer_id: &str,
    column_id: &str,
    node_id: &str,
) -> EditorResult<()> {
    let (columns, children) = footer_parts(root, footer_id)?;
    let column = find_column(columns, footer_id, column_id)?;

    let index = column
        .content
        .iter()
        .position(|id| id == node_id)
        .ok_or_else(|| EditorError::NotInColumn {
            column: column_id.to_string(),
            id: node_id.to_string(),
        })?;
    column.content.remove(index);
    children.retain(|child| child.id != node_id);
    Ok(())
}
