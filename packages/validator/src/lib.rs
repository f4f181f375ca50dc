//! # Blueprint Validator
//!
//! Structural validation of blueprint snapshots: per-node schema rules,
//! reference integrity (slots, columns, content) and global id uniqueness.
//!
//! ```rust,ignore
//! use blueprint_validator::{validate_tree, collect_issues};
//!
//! // Fail fast
//! validate_tree(&snapshot)?;
//!
//! // Gather everything for a diagnostics panel
//! for issue in collect_issues(&snapshot) {
//!     println!("{}: {}", issue.node_id, issue.reason);
//! }
//! ```

mod issue;
mod json;
mod rules;
mod validator;

pub use issue::{Issue, ValidationError, SNAPSHOT_ISSUE_ID};
pub use json::validate_json;
pub use rules::{
    ChildrenRule, FooterRule, HeaderRule, IdentityRule, LayoutRule, NodeRule, PayloadRule,
    RuleRegistry,
};
pub use validator::{
    collect_issues, validate_node, validate_node_with, validate_tree, validate_tree_with, Validator,
};
