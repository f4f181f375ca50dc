//! # History
//!
//! Linear undo/redo over immutable snapshots.
//!
//! ## Design
//!
//! - `past` holds earlier snapshots, oldest first
//! - `future` holds undone snapshots, the next one to redo last
//! - Any edit pushes `present` onto `past` and clears `future`
//! - `past` is trimmed from the oldest end beyond the configured limit
//!
//! Snapshots share untouched subtrees, so keeping a hundred of them costs
//! roughly the size of the edited paths, not a hundred documents.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut store = HistoryStore::new(Snapshot::skeleton());
//!
//! store.dispatch(Action::Remove { node_id: "section-1".into() })?;
//!
//! store.undo();
//! store.redo();
//! ```

use blueprint_model::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::actions::Action;
use crate::config::EditorConfig;
use crate::errors::EditorResult;
use crate::reducer::reducer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    pub past: Vec<Snapshot>,
    pub present: Snapshot,
    pub future: Vec<Snapshot>,
}

impl HistoryState {
    pub fn new(present: Snapshot) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
        }
    }

    /// History one step back, or `None` when there is nothing to undo
    pub fn undone(&self) -> Option<Self> {
        let mut past = self.past.clone();
        let previous = past.pop()?;
        let mut future = self.future.clone();
        future.push(self.present.clone());
        Some(Self {
            past,
            present: previous,
            future,
        })
    }

    /// History one step forward, or `None` when there is nothing to redo
    pub fn redone(&self) -> Option<Self> {
        let mut future = self.future.clone();
        let next = future.pop()?;
        let mut past = self.past.clone();
        past.push(self.present.clone());
        Some(Self {
            past,
            present: next,
            future,
        })
    }

    /// History after an edit produced `next` (0 = unlimited)
    pub fn pushed(&self, next: Snapshot, limit: usize) -> Self {
        let mut past = self.past.clone();
        past.push(self.present.clone());
        if limit > 0 && past.len() > limit {
            let excess = past.len() - limit;
            past.drain(..excess);
        }
        Self {
            past,
            present: next,
            future: Vec::new(),
        }
    }
}

/// Owner of a history that applies actions through the reducer
#[derive(Debug, Clone)]
pub struct HistoryStore {
    state: HistoryState,
    config: EditorConfig,
}

impl HistoryStore {
    /// Create a store with the default config
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_config(snapshot, EditorConfig::default())
    }

    pub fn with_config(snapshot: Snapshot, config: EditorConfig) -> Self {
        Self {
            state: HistoryState::new(snapshot),
            config,
        }
    }

    /// Run an action; on error the store is unchanged
    pub fn dispatch(&mut self, action: Action) -> EditorResult<()> {
        match reducer(&self.state, &action, &self.config) {
            Ok(next) => {
                self.state = next;
                debug!(
                    action = action.name(),
                    undo_levels = self.undo_levels(),
                    redo_levels = self.redo_levels(),
                    "Dispatched action"
                );
                Ok(())
            }
            Err(e) => {
                warn!(action = action.name(), error = %e, "Action rejected");
                Err(e)
            }
        }
    }

    /// Undo the most recent edit; false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.state.undone() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone edit; false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.state.redone() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    pub fn present(&self) -> &Snapshot {
        &self.state.present
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        !self.state.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.state.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.state.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.state.future.len()
    }

    /// Forget all undo/redo history, keeping the present snapshot
    pub fn clear(&mut self) {
        self.state.past.clear();
        self.state.future.clear();
    }
}
