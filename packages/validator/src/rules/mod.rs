mod checks;
mod footer;
mod header;
mod identity;
mod layout;
mod payload;

pub use footer::FooterRule;
pub use header::HeaderRule;
pub use identity::{ChildrenRule, IdentityRule};
pub use layout::LayoutRule;
pub use payload::PayloadRule;

use blueprint_model::Node;

/// A family of per-node checks
///
/// Rules only look at one node (and the ids of its direct children); whole
/// tree properties such as id uniqueness are checked separately.
pub trait NodeRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable violations found on `node`
    fn check(&self, node: &Node, is_root: bool) -> Vec<String>;
}

/// Registry of node rules, run in registration order
pub struct RuleRegistry {
    rules: Vec<Box<dyn NodeRule + Send + Sync>>,
}

impl RuleRegistry {
    /// Create a registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(IdentityRule),
                Box::new(ChildrenRule),
                Box::new(PayloadRule),
                Box::new(HeaderRule),
                Box::new(FooterRule),
                Box::new(LayoutRule),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn NodeRule + Send + Sync>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn NodeRule + Send + Sync>] {
        &self.rules
    }

    /// Run every rule against `node`
    pub fn check(&self, node: &Node, is_root: bool) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(node, is_root))
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}
