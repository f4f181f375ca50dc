//! # Document Handle
//!
//! A blueprint document backed by a JSON file on disk.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Dispatch actions → Save
//!   ↓            ↓             ↓
//! File   HistoryStore     File (2-space JSON)
//! ```

use std::path::{Path, PathBuf};

use blueprint_model::Snapshot;
use tracing::info;

use crate::actions::Action;
use crate::config::EditorConfig;
use crate::errors::EditorResult;
use crate::history::HistoryStore;

/// Editable blueprint document
#[derive(Debug)]
pub struct Document {
    /// Path to the JSON file
    pub path: PathBuf,

    /// Current version number (increments on each change, undo/redo included)
    pub version: u64,

    dirty: bool,
    history: HistoryStore,
}

impl Document {
    /// New document holding a fresh skeleton; nothing is written until `save`
    pub fn create(path: impl Into<PathBuf>, config: EditorConfig) -> Self {
        Self {
            path: path.into(),
            version: 0,
            dirty: true,
            history: HistoryStore::with_config(Snapshot::skeleton(), config),
        }
    }

    /// Load document from file
    pub fn load(path: impl Into<PathBuf>, config: EditorConfig) -> EditorResult<Self> {
        let path = path.into();
        let source = std::fs::read_to_string(&path)?;
        let snapshot = Snapshot::from_json(&source)?;
        info!(path = %path.display(), root = %snapshot.root.id, "Loaded document");

        let mut history = HistoryStore::with_config(snapshot.clone(), config);
        // Route through HYDRATE so dev guards see the loaded tree
        history.dispatch(Action::Hydrate { snapshot })?;

        Ok(Self {
            path,
            version: 0,
            dirty: false,
            history,
        })
    }

    /// Apply an action; returns the new version
    pub fn apply(&mut self, action: Action) -> EditorResult<u64> {
        self.history.dispatch(action)?;
        self.touch();
        Ok(self.version)
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.touch();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.touch();
        }
        changed
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.history.present()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save document to disk
    pub fn save(&mut self) -> EditorResult<()> {
        let mut json = self.snapshot().to_json_pretty()?;
        json.push('\n');
        std::fs::write(&self.path, json)?;
        self.dirty = false;
        info!(path = %self.path.display(), version = self.version, "Saved document");
        Ok(())
    }

    /// Save to a new location and keep editing there
    pub fn save_as(&mut self, path: &Path) -> EditorResult<()> {
        self.path = path.to_path_buf();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_model::{Node, NodeType};

    #[test]
    fn test_create_document() {
        let doc = Document::create("site.json", EditorConfig::default());
        assert_eq!(doc.version, 0);
        assert!(doc.is_dirty());
        assert_eq!(doc.snapshot().root.children.len(), 3);
    }

    #[test]
    fn test_document_version_increments() {
        let mut doc = Document::create("site.json", EditorConfig::default());
        let section = doc.snapshot().root.children[1].id.clone();

        let version = doc
            .apply(Action::AddComponent {
                parent_id: section,
                node: Node::new(NodeType::Divider, "d1"),
                index: None,
            })
            .unwrap();
        assert_eq!(version, 1);

        assert!(doc.undo());
        assert_eq!(doc.version, 2);
        assert!(!doc.undo());
        assert_eq!(doc.version, 2);
    }

    #[test]
    fn test_failed_apply_keeps_version() {
        let mut doc = Document::create("site.json", EditorConfig::default());
        let result = doc.apply(Action::Remove {
            node_id: "missing".into(),
        });
        assert!(result.is_err());
        assert_eq!(doc.version, 0);
    }
}
