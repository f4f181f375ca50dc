use blueprint_model::{Node, NodeData};

use super::checks;
use super::NodeRule;

/// Header navigation payload
pub struct HeaderRule;

impl NodeRule for HeaderRule {
    fn name(&self) -> &'static str {
        "header"
    }

    fn check(&self, node: &Node, _is_root: bool) -> Vec<String> {
        let NodeData::Header(data) = &node.data else {
            return Vec::new();
        };

        let mut reasons = Vec::new();
        checks::nav_items(&mut reasons, "data.navItems", &data.nav_items);
        if let Some(mobile) = &data.mobile {
            if mobile.behavior.is_none() {
                reasons.push("data.mobile.behavior is required when data.mobile is set".to_string());
            }
        }
        reasons
    }
}
