//! # Blueprint Model
//!
//! Typed document tree for the Blueprint website builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Node tree, payloads, selectors       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validator: schema + integrity checks        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: reducer, undo/redo history          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Snapshots are persistent: every node's children sit behind `Arc`, so
//! history entries share all untouched subtrees.

pub mod decode;
pub mod error;
pub mod id_generator;
pub mod layout;
pub mod node;
pub mod payload;
pub mod selectors;
pub mod skeleton;
pub mod snapshot;

pub use decode::{decode_node, decode_node_lenient, DecodeProblem};
pub use error::{ModelError, ModelResult};
pub use id_generator::generate_node_id;
pub use layout::{Bucket, FooterColumn, HeaderSlots, Layout, RefKind, RowColumn, SlotName};
pub use node::{Node, NodeType, Styles};
pub use payload::*;
pub use selectors::{
    collect_ids, is_ancestor, select_children_or_empty, select_footer_columns, select_header_slot,
    select_node_by_id, select_parent, select_path, select_path_ids, select_path_nodes, NodePath,
};
pub use skeleton::create_initial_skeleton;
pub use snapshot::Snapshot;
