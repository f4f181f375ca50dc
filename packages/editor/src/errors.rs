//! Error types for the editor

use blueprint_model::{ModelError, NodeType, SlotName};
use blueprint_validator::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("'{node_type}' node {id} cannot have children")]
    LeafParent { id: String, node_type: NodeType },

    #[error("Index {index} out of bounds for {len} items in {id}")]
    IndexOutOfBounds { id: String, index: usize, len: usize },

    #[error("Node id already in use: {0}")]
    DuplicateId(String),

    #[error("Malformed node: {0}")]
    MalformedNode(String),

    #[error("Would create cycle: {node} cannot move into {target}")]
    CycleDetected { node: String, target: String },

    #[error("Cannot remove the root node")]
    CannotRemoveRoot,

    #[error("Cannot wrap the root node")]
    CannotWrapRoot,

    #[error("'{0}' cannot be used as a container")]
    InvalidContainerType(NodeType),

    #[error("Node {0} is not a header")]
    NotAHeader(String),

    #[error("Node {0} is not a footer")]
    NotAFooter(String),

    #[error("Node {0} has no navigation items")]
    NotANavOwner(String),

    #[error("Header {0} has no free slot")]
    SlotsFull(String),

    #[error("Node {id} is not in slot '{}'", .slot.as_str())]
    NotInSlot { slot: SlotName, id: String },

    #[error("Column {column} not found in {owner}")]
    ColumnNotFound { owner: String, column: String },

    #[error("Column id already in use: {0}")]
    DuplicateColumn(String),

    #[error("Node {0} has no columns to place children in")]
    NoColumns(String),

    #[error("Node {id} is not in column {column}")]
    NotInColumn { column: String, id: String },

    #[error("Navigation item not found: {0}")]
    NavItemNotFound(String),

    #[error("Navigation item id already in use: {0}")]
    DuplicateNavItem(String),

    #[error("Invalid data for {id}: {message}")]
    InvalidData { id: String, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;
