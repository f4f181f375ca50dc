//! Property-based invariant tests for the reducer.
//!
//! Random action sequences run against a fresh skeleton. Rejected actions
//! are swallowed. Properties checked:
//!
//! 1. The tree validates after every single step (dev guards off, so the
//!    editing algorithms alone must keep it consistent).
//! 2. Every id appears exactly once.
//! 3. Removal leaves no reference to any removed id.
//! 4. Reorder permutes children and lands the moved id at `to`.
//! 5. Undoing every step then redoing every step restores the final snapshot.

use std::collections::HashSet;

use blueprint_editor::{Action, EditorConfig, HistoryStore};
use blueprint_model::{
    collect_ids, select_node_by_id, Node, NodeData, NodeType, ParagraphData, Snapshot,
};
use blueprint_validator::validate_tree;
use proptest::prelude::*;
use serde_json::json;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Step {
    kind: u8,
    pick: usize,
    a: usize,
    b: usize,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (0u8..5, any::<usize>(), any::<usize>(), any::<usize>())
        .prop_map(|(kind, pick, a, b)| Step { kind, pick, a, b })
}

fn steps_strategy() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(step_strategy(), 1..40)
}

const CONTAINERS: [NodeType; 4] = [
    NodeType::Section,
    NodeType::Container,
    NodeType::Row,
    NodeType::Column,
];

fn fresh_node(counter: &mut usize, variant: usize) -> Node {
    *counter += 1;
    let id = format!("n{}", counter);
    match variant % 3 {
        0 => Node::new(NodeType::Paragraph, id).with_data(NodeData::Paragraph(ParagraphData {
            text: Some("Lorem".into()),
            ..ParagraphData::default()
        })),
        1 => Node::new(NodeType::Divider, id),
        _ => Node::new(NodeType::Container, id),
    }
}

/// Translate a random step into an action against the current tree
fn action_for(snapshot: &Snapshot, step: &Step, counter: &mut usize) -> Action {
    let ids = collect_ids(&snapshot.root);
    let target = ids[step.pick % ids.len()].clone();

    match step.kind {
        0 => Action::AddComponent {
            parent_id: target,
            node: fresh_node(counter, step.a),
            index: Some(step.b % 4),
        },
        1 => Action::UpdateData {
            node_id: target,
            data: json!({ "note": format!("edit {}", step.a % 100) })
                .as_object()
                .cloned()
                .unwrap_or_default(),
        },
        2 => Action::WrapInContainer {
            node_id: target,
            container_type: CONTAINERS[step.a % CONTAINERS.len()],
        },
        3 => Action::Remove { node_id: target },
        _ => {
            let len = select_node_by_id(&snapshot.root, &target)
                .map(|n| n.children.len())
                .unwrap_or(0)
                .max(1);
            Action::Reorder {
                parent_id: target,
                from: step.a % len,
                to: step.b % len,
            }
        }
    }
}

fn unguarded_store() -> HistoryStore {
    HistoryStore::with_config(
        Snapshot::skeleton(),
        EditorConfig::default()
            .with_dev_guards(false)
            .with_history_limit(0),
    )
}

fn assert_unique_ids(snapshot: &Snapshot) {
    let ids = collect_ids(&snapshot.root);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {:?}", ids);
}

fn subtree_ids(snapshot: &Snapshot, id: &str) -> Vec<String> {
    select_node_by_id(&snapshot.root, id)
        .map(collect_ids)
        .unwrap_or_default()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn random_sequences_keep_tree_valid(steps in steps_strategy()) {
        let mut store = unguarded_store();
        let mut counter = 0;

        for step in &steps {
            let action = action_for(store.present(), step, &mut counter);
            let before = store.present().clone();

            let removed = match &action {
                Action::Remove { node_id } => subtree_ids(&before, node_id),
                _ => Vec::new(),
            };

            if store.dispatch(action.clone()).is_err() {
                prop_assert_eq!(store.present(), &before);
                continue;
            }

            let after = store.present();
            prop_assert!(validate_tree(after).is_ok(), "invalid after {:?}", action);
            assert_unique_ids(after);

            if !removed.is_empty() {
                let remaining: HashSet<String> = collect_ids(&after.root).into_iter().collect();
                let mut dangling = false;
                after.root.walk(&mut |n| {
                    dangling |= removed.iter().any(|id| n.layout.references(id));
                });
                prop_assert!(!dangling);
                prop_assert!(removed.iter().all(|id| !remaining.contains(id)));
            }

            if let Action::Reorder { parent_id, from, to } = &action {
                let old = select_node_by_id(&before.root, parent_id)
                    .map(|n| n.child_ids().map(str::to_string).collect::<Vec<_>>())
                    .unwrap_or_default();
                let new = select_node_by_id(&after.root, parent_id)
                    .map(|n| n.child_ids().map(str::to_string).collect::<Vec<_>>())
                    .unwrap_or_default();
                let old_set: HashSet<&String> = old.iter().collect();
                let new_set: HashSet<&String> = new.iter().collect();
                prop_assert_eq!(old_set, new_set);
                prop_assert_eq!(&new[*to], &old[*from]);
            }
        }
    }

    #[test]
    fn guarded_sequences_never_fail_validation(steps in steps_strategy()) {
        let mut store = HistoryStore::with_config(
            Snapshot::skeleton(),
            EditorConfig::default().with_dev_guards(true),
        );
        let mut counter = 0;

        for step in &steps {
            let action = action_for(store.present(), step, &mut counter);
            let _ = store.dispatch(action);
            prop_assert!(validate_tree(store.present()).is_ok());
        }
    }

    #[test]
    fn undo_redo_round_trip(steps in steps_strategy()) {
        let mut store = unguarded_store();
        let initial = store.present().clone();
        let mut counter = 0;

        for step in &steps {
            let action = action_for(store.present(), step, &mut counter);
            let _ = store.dispatch(action);
        }
        let last = store.present().clone();
        let levels = store.undo_levels();

        for _ in 0..levels {
            prop_assert!(store.undo());
        }
        prop_assert_eq!(store.present(), &initial);

        for _ in 0..levels {
            prop_assert!(store.redo());
        }
        prop_assert_eq!(store.present(), &last);
    }
}
