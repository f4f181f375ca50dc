use std::collections::HashSet;

use blueprint_model::{Node, NodeData};

use super::checks;
use super::NodeRule;

/// Footer navigation, social links and legal block
pub struct FooterRule;

impl NodeRule for FooterRule {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn check(&self, node: &Node, _is_root: bool) -> Vec<String> {
        let NodeData::Footer(data) = &node.data else {
            return Vec::new();
        };

        let mut reasons = Vec::new();
        checks::nav_items(&mut reasons, "data.navItems", &data.nav_items);

        let mut seen = HashSet::new();
        for (i, link) in data.social_links.iter().enumerate() {
            if checks::is_blank(&link.id) {
                reasons.push(format!("data.socialLinks[{}].id must be a non-empty string", i));
            } else if !seen.insert(link.id.as_str()) {
                reasons.push(format!("data.socialLinks has duplicate id '{}'", link.id));
            }
            if checks::is_blank(&link.url) {
                reasons.push(format!("data.socialLinks[{}].url must be a non-empty string", i));
            }
        }

        if let Some(legal) = &data.legal {
            checks::optional_text(&mut reasons, "data.legal.text", legal.text.as_deref());
            checks::nav_items(&mut reasons, "data.legal.links", &legal.links);
        }

        reasons
    }
}
