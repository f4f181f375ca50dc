use blueprint_model::{Node, NodeData, NodeType};

use super::checks::is_blank;
use super::NodeRule;

/// Id, type and payload-kind sanity
pub struct IdentityRule;

impl NodeRule for IdentityRule {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn check(&self, node: &Node, is_root: bool) -> Vec<String> {
        let mut reasons = Vec::new();

        if is_blank(&node.id) {
            reasons.push("id must be a non-empty string".to_string());
        }
        if node.node_type == NodeType::Unknown {
            reasons.push(format!("type '{}' is not a known node type", node.type_tag()));
        }
        if is_root && node.node_type != NodeType::Page {
            reasons.push(format!("root node must be of type 'page' (got '{}')", node.type_tag()));
        }
        if !is_root && node.node_type == NodeType::Page {
            reasons.push("'page' nodes may only appear at the root".to_string());
        }
        if !matches!(node.data, NodeData::Invalid(_)) && !node.data.matches(node.node_type) {
            reasons.push(format!("data does not match node type '{}'", node.node_type));
        }

        reasons
    }
}

/// Leaf types own no children
pub struct ChildrenRule;

impl NodeRule for ChildrenRule {
    fn name(&self) -> &'static str {
        "children"
    }

    fn check(&self, node: &Node, _is_root: bool) -> Vec<String> {
        if node.node_type.is_leaf() && !node.children.is_empty() {
            return vec![format!(
                "'{}' nodes must not have children (found {})",
                node.node_type,
                node.children.len()
            )];
        }
        Vec::new()
    }
}
