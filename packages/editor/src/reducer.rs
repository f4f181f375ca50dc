//! # Reducer
//!
//! `reducer(history, action) -> history` as a pure function. The previous
//! history is never modified; a rejected action leaves it exactly as it was.
//!
//! ```text
//!           UNDO                     edit action
//!  past ◄──────────── present ──────────────────► past + [present]
//!        ────────────►         new present, future cleared
//!           REDO
//! ```
//!
//! With dev guards on, every edit is bracketed by throw-mode validation of
//! the snapshot before and after the change.

use std::sync::Arc;

use blueprint_model::Snapshot;
use blueprint_validator::validate_tree;
use tracing::debug;

use crate::actions::Action;
use crate::config::EditorConfig;
use crate::errors::EditorResult;
use crate::history::HistoryState;
use crate::{nav_ops, slot_ops, tree_ops};

pub fn reducer(
    history: &HistoryState,
    action: &Action,
    config: &EditorConfig,
) -> EditorResult<HistoryState> {
    match action {
        Action::Undo => Ok(history.undone().unwrap_or_else(|| history.clone())),
        Action::Redo => Ok(history.redone().unwrap_or_else(|| history.clone())),
        Action::Hydrate { snapshot } => {
            if config.dev_guards {
                validate_tree(snapshot)?;
            }
            Ok(HistoryState::new(snapshot.clone()))
        }
        _ => {
            if config.dev_guards {
                validate_tree(&history.present)?;
            }
            let next = apply_edit(&history.present, action)?;
            if config.dev_guards {
                validate_tree(&next)?;
            }
            debug!(action = action.name(), root = %next.root.id, "Applied edit");
            Ok(history.pushed(next, config.history_limit))
        }
    }
}

/// Apply one edit action to a snapshot, producing the next snapshot
///
/// Meta actions (undo/redo) return the snapshot unchanged.
pub fn apply_edit(snapshot: &Snapshot, action: &Action) -> EditorResult<Snapshot> {
    let mut root = Arc::clone(&snapshot.root);
    let root_ref = &mut root;

    match action {
        Action::Undo | Action::Redo => {}
        Action::Hydrate { snapshot } => return Ok(snapshot.clone()),
        Action::AddComponent {
            parent_id,
            node,
            index,
        } => tree_ops::add_component(root_ref, parent_id, node, *index)?,
        Action::UpdateData { node_id, data } => tree_ops::update_data(root_ref, node_id, data)?,
        Action::UpdateStyles { node_id, styles } => {
            tree_ops::update_styles(root_ref, node_id, styles)?
        }
        Action::Reorder {
            parent_id,
            from,
            to,
        } => tree_ops::reorder(root_ref, parent_id, *from, *to)?,
        Action::MoveNode {
            from_parent_id,
            from_index,
            to_parent_id,
            to_index,
        } => tree_ops::move_node(root_ref, from_parent_id, *from_index, to_parent_id, *to_index)?,
        Action::WrapInContainer {
            node_id,
            container_type,
        } => {
            tree_ops::wrap_in_container(root_ref, node_id, *container_type)?;
        }
        Action::WrapAndMove {
            target_id,
            dragging_id,
            container_type,
            to_index,
        } => {
            tree_ops::wrap_and_move(root_ref, target_id, dragging_id, *container_type, *to_index)?;
        }
        Action::Remove { node_id } => tree_ops::remove(root_ref, node_id)?,
        Action::AddToHeaderSlot {
            header_id,
            slot,
            node,
        } => slot_ops::add_to_header_slot(root_ref, header_id, *slot, node)?,
        Action::RemoveFromHeaderSlot {
            header_id,
            slot,
            node_id,
        } => slot_ops::remove_from_header_slot(root_ref, header_id, *slot, node_id)?,
        Action::AddNavItem {
            owner_id,
            item,
            index,
        } => nav_ops::add_nav_item(root_ref, owner_id, item, *index)?,
        Action::UpdateNavItem {
            owner_id,
            item_id,
            patch,
        } => nav_ops::update_nav_item(root_ref, owner_id, item_id, patch)?,
        Action::RemoveNavItem { owner_id, item_id } => {
            nav_ops::remove_nav_item(root_ref, owner_id, item_id)?
        }
        Action::ReorderNavItems { owner_id, from, to } => {
            nav_ops::reorder_nav_items(root_ref, owner_id, *from, *to)?
        }
        Action::AddFooterColumn {
            footer_id,
            column_id,
        } => {
            slot_ops::add_footer_column(root_ref, footer_id, column_id.as_deref())?;
        }
        Action::RemoveFooterColumn {
            footer_id,
            column_id,
        } => slot_ops::remove_footer_column(root_ref, footer_id, column_id)?,
        Action::AddToFooterColumn {
            footer_id,
            column_id,
            node,
            index,
        } => slot_ops::add_to_footer_column(root_ref, footer_id, column_id, node, *index)?,
        Action::ReorderFooterColumn {
            footer_id,
            column_id,
            from,
            to,
        } => slot_ops::reorder_footer_column(root_ref, footer_id, column_id, *from, *to)?,
        Action::RemoveFromFooterColumn {
            footer_id,
            column_id,
            node_id,
        } => slot_ops::remove_from_footer_column(root_ref, footer_id, column_id, node_id)?,
    }

    Ok(Snapshot { root })
}
