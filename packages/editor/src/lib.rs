//! # Blueprint Editor
//!
//! Editing engine for blueprint documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Node tree, payloads, selectors       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: actions → reducer → history         │
//! │  - Tree edits with reference upkeep         │
//! │  - Header slots, footer columns, nav items  │
//! │  - Linear undo/redo                         │
//! │  - Dev guards (validator, throw mode)       │
//! │  - File-backed documents                    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ consumers: renderer, exporter, CLI          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Actions are the only write path**: snapshots are never edited in place
//! 2. **All or nothing**: a failed action leaves the history untouched
//! 3. **Structural sharing**: an edit copies only the path it changes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blueprint_editor::{Action, Document, EditorConfig};
//!
//! let mut doc = Document::load("site.json", EditorConfig::default())?;
//!
//! doc.apply(Action::WrapInContainer {
//!     node_id: "heading-1".into(),
//!     container_type: NodeType::Container,
//! })?;
//!
//! doc.save()?;
//! ```

mod actions;
mod config;
mod document;
mod errors;
mod history;
mod nav_ops;
mod reducer;
mod slot_ops;
mod tree_ops;

pub use actions::Action;
pub use config::EditorConfig;
pub use document::Document;
pub use errors::{EditorError, EditorResult};
pub use history::{HistoryState, HistoryStore};
pub use reducer::{apply_edit, reducer};
