//! # Structural Validator
//!
//! Two passes over a snapshot:
//!
//! 1. **Schema pass**: top-down, every node is checked by the rule registry.
//!    All violations on one node are gathered before reporting.
//! 2. **Identity pass**: one depth-first walk collecting ids; the first
//!    repeat of any id is a duplicate, wherever the copies live.
//!
//! Each pass runs in one of two modes:
//!
//! - **Throw mode** (`validate_*`): stop at the first offending node and
//!   return a single aggregated [`ValidationError`].
//! - **Collector mode** (`validate_*_with`): report every violation as an
//!   [`Issue`] through the callback and keep going. Never fails.

use std::collections::HashSet;

use blueprint_model::{Node, Snapshot};
use tracing::debug;

use crate::issue::{Issue, ValidationError};
use crate::rules::RuleRegistry;

enum Sink<'a> {
    Throw,
    Collect(&'a mut dyn FnMut(Issue)),
}

impl Sink<'_> {
    fn node(&mut self, node_id: &str, reasons: Vec<String>) -> Result<(), ValidationError> {
        if reasons.is_empty() {
            return Ok(());
        }
        match self {
            Sink::Throw => Err(ValidationError::InvalidNode {
                id: node_id.to_string(),
                reasons,
            }),
            Sink::Collect(collect) => {
                for reason in reasons {
                    collect(Issue::new(node_id, reason));
                }
                Ok(())
            }
        }
    }

    fn duplicate(&mut self, id: &str) -> Result<(), ValidationError> {
        match self {
            Sink::Throw => Err(ValidationError::DuplicateId(id.to_string())),
            Sink::Collect(collect) => {
                collect(Issue::new(id, format!("Duplicate node id detected: {}", id)));
                Ok(())
            }
        }
    }
}

/// Validator over a rule registry
#[derive(Debug, Default)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Schema pass over `node` and its subtree, failing on the first invalid node
    pub fn validate_node(&self, node: &Node, is_root: bool) -> Result<(), ValidationError> {
        self.walk(node, is_root, &mut Sink::Throw)
    }

    /// Schema pass reporting every violation to `collector`
    pub fn validate_node_with(&self, node: &Node, is_root: bool, collector: &mut dyn FnMut(Issue)) {
        // Collect mode never produces an error.
        let _ = self.walk(node, is_root, &mut Sink::Collect(collector));
    }

    /// Schema pass plus global id uniqueness
    pub fn validate_tree(&self, snapshot: &Snapshot) -> Result<(), ValidationError> {
        let mut sink = Sink::Throw;
        self.walk(&snapshot.root, true, &mut sink)?;
        check_unique_ids(&snapshot.root, &mut sink)
    }

    pub fn validate_tree_with(&self, snapshot: &Snapshot, collector: &mut dyn FnMut(Issue)) {
        let mut count = 0usize;
        {
            let mut counting = |issue: Issue| {
                count += 1;
                collector(issue);
            };
            let mut sink = Sink::Collect(&mut counting);
            let _ = self.walk(&snapshot.root, true, &mut sink);
            let _ = check_unique_ids(&snapshot.root, &mut sink);
        }
        debug!(root = %snapshot.root.id, issues = count, "Tree validation complete");
    }

    pub fn collect_issues(&self, snapshot: &Snapshot) -> Vec<Issue> {
        let mut issues = Vec::new();
        self.validate_tree_with(snapshot, &mut |issue| issues.push(issue));
        issues
    }

    fn walk(&self, node: &Node, is_root: bool, sink: &mut Sink<'_>) -> Result<(), ValidationError> {
        sink.node(&node.id, self.registry.check(node, is_root))?;
        for child in &node.children {
            self.walk(child, false, sink)?;
        }
        Ok(())
    }
}

fn check_unique_ids(root: &Node, sink: &mut Sink<'_>) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&Node> = vec![root];

    while let Some(node) = stack.pop() {
        if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            sink.duplicate(&node.id)?;
        }
        stack.extend(node.children.iter().rev().map(|c| c.as_ref()));
    }

    Ok(())
}

/// Throw-mode schema pass with the built-in rules
pub fn validate_node(node: &Node, is_root: bool) -> Result<(), ValidationError> {
    Validator::new().validate_node(node, is_root)
}

/// Collector-mode schema pass with the built-in rules
pub fn validate_node_with(node: &Node, is_root: bool, collector: &mut dyn FnMut(Issue)) {
    Validator::new().validate_node_with(node, is_root, collector)
}

/// Throw-mode full validation with the built-in rules
pub fn validate_tree(snapshot: &Snapshot) -> Result<(), ValidationError> {
    Validator::new().validate_tree(snapshot)
}

/// Collector-mode full validation with the built-in rules
pub fn validate_tree_with(snapshot: &Snapshot, collector: &mut dyn FnMut(Issue)) {
    Validator::new().validate_tree_with(snapshot, collector)
}

/// Every issue in the snapshot, in traversal order
pub fn collect_issues(snapshot: &Snapshot) -> Vec<Issue> {
    Validator::new().collect_issues(snapshot)
}
