//! Navigation item edits.
//!
//! Nav items live in `data.navItems` of a header or footer. They are plain
//! records, never tree nodes, so these edits leave `children` alone.

use std::sync::Arc;

use blueprint_model::{NavItem, Node, NodeData};
use serde_json::{Map, Value};

use crate::errors::{EditorError, EditorResult};
use crate::tree_ops::{check_index, node_mut};

fn nav_items_mut<'a>(root: &'a mut Arc<Node>, owner_id: &str) -> EditorResult<&'a mut Vec<NavItem>> {
    match &mut node_mut(root, owner_id)?.data {
        NodeData::Header(data) => Ok(&mut data.nav_items),
        NodeData::Footer(data) => Ok(&mut data.nav_items),
        _ => Err(EditorError::NotANavOwner(owner_id.to_string())),
    }
}

fn position(items: &[NavItem], item_id: &str) -> EditorResult<usize> {
    items
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| EditorError::NavItemNotFound(item_id.to_string()))
}

pub fn add_nav_item(
    root: &mut Arc<Node>,
    owner_id: &str,
    item: &NavItem,
    index: Option<usize>,
) -> EditorResult<()> {
    if item.id.trim().is_empty() {
        return Err(EditorError::InvalidData {
            id: owner_id.to_string(),
            message: "navigation item id must be non-empty".to_string(),
        });
    }

    let items = nav_items_mut(root, owner_id)?;
    if items.iter().any(|existing| existing.id == item.id) {
        return Err(EditorError::DuplicateNavItem(item.id.clone()));
    }
    let len = items.len();
    items.insert(index.unwrap_or(len).min(len), item.clone());
    Ok(())
}

/// Merge `patch` into the item; the item keeps its id
pub fn update_nav_item(
    root: &mut Arc<Node>,
    owner_id: &str,
    item_id: &str,
    patch: &Map<String, Value>,
) -> EditorResult<()> {
    let invalid = |e: serde_json::Error| EditorError::InvalidData {
        id: owner_id.to_string(),
        message: e.to_string(),
    };

    let items = nav_items_mut(root, owner_id)?;
    let index = position(items, item_id)?;

    let mut fields = match serde_json::to_value(&items[index]).map_err(invalid)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in patch {
        fields.insert(key.clone(), value.clone());
    }
    fields.insert("id".to_string(), Value::String(item_id.to_string()));

    items[index] = serde_json::from_value(Value::Object(fields)).map_err(invalid)?;
    Ok(())
}

pub fn remove_nav_item(root: &mut Arc<Node>, owner_id: &str, item_id: &str) -> EditorResult<()> {
    let items = nav_items_mut(root, owner_id)?;
    let index = position(items, item_id)?;
    items.remove(index);
    Ok(())
}

pub fn reorder_nav_items(root: &mut Arc<Node>, owner_id: &str, from: usize, to: usize) -> EditorResult<()> {
    let items = nav_items_mut(root, owner_id)?;
    check_index(owner_id, from, items.len())?;
    check_index(owner_id, to, items.len())?;
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
