//! # Actions
//!
//! The closed set of messages accepted by the reducer. This is the only
//! write path into a blueprint history.
//!
//! On the wire an action is a JSON object tagged by `type`:
//!
//! ```json
//! { "type": "REORDER", "parentId": "section-1", "from": 2, "to": 0 }
//! ```

use blueprint_model::{NavItem, Node, NodeType, SlotName, Snapshot, Styles};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Step back one edit
    Undo,

    /// Step forward one undone edit
    Redo,

    /// Replace the whole history with a loaded snapshot
    Hydrate { snapshot: Snapshot },

    #[serde(rename_all = "camelCase")]
    AddComponent {
        parent_id: String,
        node: Node,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    UpdateData {
        node_id: String,
        data: Map<String, Value>,
    },

    #[serde(rename_all = "camelCase")]
    UpdateStyles { node_id: String, styles: Styles },

    #[serde(rename_all = "camelCase")]
    Reorder {
        parent_id: String,
        from: usize,
        to: usize,
    },

    #[serde(rename_all = "camelCase")]
    MoveNode {
        from_parent_id: String,
        from_index: usize,
        to_parent_id: String,
        to_index: usize,
    },

    #[serde(rename_all = "camelCase")]
    WrapInContainer {
        node_id: String,
        container_type: NodeType,
    },

    #[serde(rename_all = "camelCase")]
    WrapAndMove {
        target_id: String,
        dragging_id: String,
        container_type: NodeType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    Remove { node_id: String },

    #[serde(rename_all = "camelCase")]
    AddToHeaderSlot {
        header_id: String,
        slot: SlotName,
        node: Node,
    },

    #[serde(rename_all = "camelCase")]
    RemoveFromHeaderSlot {
        header_id: String,
        slot: SlotName,
        node_id: String,
    },

    #[serde(rename_all = "camelCase")]
    AddNavItem {
        owner_id: String,
        item: NavItem,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    UpdateNavItem {
        owner_id: String,
        item_id: String,
        patch: Map<String, Value>,
    },

    #[serde(rename_all = "camelCase")]
    RemoveNavItem { owner_id: String, item_id: String },

    #[serde(rename_all = "camelCase")]
    ReorderNavItems {
        owner_id: String,
        from: usize,
        to: usize,
    },

    /// Append a column; a fresh id is generated when `column_id` is absent
    #[serde(rename_all = "camelCase")]
    AddFooterColumn {
        footer_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column_id: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    RemoveFooterColumn { footer_id: String, column_id: String },

    #[serde(rename_all = "camelCase")]
    AddToFooterColumn {
        footer_id: String,
        column_id: String,
        node: Node,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    #[serde(rename_all = "camelCase")]
    ReorderFooterColumn {
        footer_id: String,
        column_id: String,
        from: usize,
        to: usize,
    },

    #[serde(rename_all = "camelCase")]
    RemoveFromFooterColumn {
        footer_id: String,
        column_id: String,
        node_id: String,
    },
}

impl Action {
    /// Wire tag of this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::Undo => "UNDO",
            Action::Redo => "REDO",
            Action::Hydrate { .. } => "HYDRATE",
            Action::AddComponent { .. } => "ADD_COMPONENT",
            Action::UpdateData { .. } => "UPDATE_DATA",
            Action::UpdateStyles { .. } => "UPDATE_STYLES",
            Action::Reorder { .. } => "REORDER",
            Action::MoveNode { .. } => "MOVE_NODE",
            Action::WrapInContainer { .. } => "WRAP_IN_CONTAINER",
            Action::WrapAndMove { .. } => "WRAP_AND_MOVE",
            Action::Remove { .. } => "REMOVE",
            Action::AddToHeaderSlot { .. } => "ADD_TO_HEADER_SLOT",
            Action::RemoveFromHeaderSlot { .. } => "REMOVE_FROM_HEADER_SLOT",
            Action::AddNavItem { .. } => "ADD_NAV_ITEM",
            Action::UpdateNavItem { .. } => "UPDATE_NAV_ITEM",
            Action::RemoveNavItem { .. } => "REMOVE_NAV_ITEM",
            Action::ReorderNavItems { .. } => "REORDER_NAV_ITEMS",
            Action::AddFooterColumn { .. } => "ADD_FOOTER_COLUMN",
            Action::RemoveFooterColumn { .. } => "REMOVE_FOOTER_COLUMN",
            Action::AddToFooterColumn { .. } => "ADD_TO_FOOTER_COLUMN",
            Action::ReorderFooterColumn { .. } => "REORDER_FOOTER_COLUMN",
            Action::RemoveFromFooterColumn { .. } => "REMOVE_FROM_FOOTER_COLUMN",
        }
    }

    /// Undo and redo move through history without editing
    pub fn is_meta(&self) -> bool {
        matches!(self, Action::Undo | Action::Redo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let action: Action = serde_json::from_value(json!({
            "type": "MOVE_NODE",
            "fromParentId": "a",
            "fromIndex": 0,
            "toParentId": "b",
            "toIndex": 3
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::MoveNode {
                from_parent_id: "a".into(),
                from_index: 0,
                to_parent_id: "b".into(),
                to_index: 3,
            }
        );
        assert_eq!(action.name(), "MOVE_NODE");
    }

    #[test]
    fn test_add_component_carries_typed_node() {
        let action: Action = serde_json::from_value(json!({
            "type": "ADD_COMPONENT",
            "parentId": "section-1",
            "node": { "id": "h1", "type": "heading", "data": { "text": "Hi", "level": 1 } }
        }))
        .unwrap();
        match action {
            Action::AddComponent { node, index, .. } => {
                assert_eq!(node.node_type, NodeType::Heading);
                assert_eq!(index, None);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_node_without_type_is_rejected() {
        let result: Result<Action, _> = serde_json::from_value(json!({
            "type": "ADD_COMPONENT",
            "parentId": "section-1",
            "node": { "id": "h1" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_hydrate_without_root() {
        let err = serde_json::from_value::<Action>(json!({
            "type": "HYDRATE",
            "snapshot": { "version": 3 }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Snapshot missing root"), "{}", err);

        let err = serde_json::from_str::<Action>(r#"{ "type": "HYDRATE", "snapshot": {} }"#)
            .unwrap_err();
        assert!(!err.to_string().contains("missing field"), "{}", err);
    }

    #[test]
    fn test_unit_actions() {
        let undo: Action = serde_json::from_value(json!({ "type": "UNDO" })).unwrap();
        assert!(undo.is_meta());
        assert_eq!(serde_json::to_value(&Action::Redo).unwrap(), json!({ "type": "REDO" }));
    }
}
