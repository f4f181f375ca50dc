use blueprint_model::Snapshot;
use serde_json::Value;

use crate::issue::{Issue, SNAPSHOT_ISSUE_ID};
use crate::validator::Validator;

impl Validator {
    /// Validate an untyped document, as read from storage or an export
    ///
    /// The document is decoded leniently, so one unreadable node does not
    /// hide the rest of the tree. Problems found while decoding are
    /// reported against the node they were found on; a missing or
    /// non-object root is reported against the snapshot itself. Returns the
    /// snapshot when there was a root to decode, whether or not it has
    /// issues.
    pub fn validate_json(&self, value: Value, collector: &mut dyn FnMut(Issue)) -> Option<Snapshot> {
        match Snapshot::from_value_lenient(value) {
            Ok((snapshot, problems)) => {
                for problem in problems {
                    collector(Issue::new(problem.node_id, problem.error.to_string()));
                }
                self.validate_tree_with(&snapshot, collector);
                Some(snapshot)
            }
            Err(err) => {
                collector(Issue::new(SNAPSHOT_ISSUE_ID, err.to_string()));
                None
            }
        }
    }
}

/// [`Validator::validate_json`] with the built-in rules
pub fn validate_json(value: Value, collector: &mut dyn FnMut(Issue)) -> Option<Snapshot> {
    Validator::new().validate_json(value, collector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_root_issue() {
        let mut issues = Vec::new();
        let snapshot = validate_json(json!({}), &mut |i| issues.push(i));
        assert!(snapshot.is_none());
        assert_eq!(issues, vec![Issue::new(SNAPSHOT_ISSUE_ID, "Snapshot missing root")]);
    }

    #[test]
    fn test_unknown_type_is_attributed() {
        let mut issues = Vec::new();
        let doc = json!({ "root": { "id": "p", "type": "page", "children": [
            { "id": "x", "type": "blink", "children": [] }
        ]}});
        assert!(validate_json(doc, &mut |i| issues.push(i)).is_some());
        assert_eq!(issues, vec![Issue::new("x", "type 'blink' is not a known node type")]);
    }

    #[test]
    fn test_every_broken_node_is_reported() {
        let mut issues = Vec::new();
        let doc = json!({ "root": { "id": "p", "type": "page", "children": [
            { "id": "s", "type": "section", "content": ["h", "l"], "children": [
                { "id": "h", "type": "heading", "data": { "text": "Hi", "level": "two" } },
                { "id": "l", "type": "list", "data": {} },
                { "id": "m", "type": "marquee" }
            ]}
        ]}});
        validate_json(doc, &mut |i| issues.push(i));

        let ids: Vec<&str> = issues.iter().map(|i| i.node_id.as_str()).collect();
        assert_eq!(ids, vec!["s", "h", "l", "m"]);
        assert_eq!(issues[0].reason, "child 'm' is not referenced by content");
        assert!(issues[1].reason.starts_with("data does not fit the 'heading' schema"));
        assert_eq!(issues[2].reason, "data.items is required");
        assert_eq!(issues[3].reason, "type 'marquee' is not a known node type");
    }

    #[test]
    fn test_decode_problems_come_with_node_ids() {
        let mut issues = Vec::new();
        let doc = json!({ "root": { "id": "p", "type": "page", "children": [
            { "id": "t", "type": "paragraph", "data": { "text": "a" }, "slots": { "logo": [] } },
            "stray"
        ]}});
        assert!(validate_json(doc, &mut |i| issues.push(i)).is_some());
        assert_eq!(
            issues,
            vec![
                Issue::new("t", "Field `slots` is not allowed on `paragraph` nodes"),
                Issue::new("p", "Malformed node: children[1] must be an object"),
            ]
        );
    }

    #[test]
    fn test_non_object_root() {
        let mut issues = Vec::new();
        assert!(validate_json(json!({ "root": 3 }), &mut |i| issues.push(i)).is_none());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].node_id, SNAPSHOT_ISSUE_ID);
    }

    #[test]
    fn test_valid_document_returns_snapshot() {
        let mut issues = Vec::new();
        let doc = json!({ "root": { "id": "p", "type": "page", "children": [] } });
        let snapshot = validate_json(doc, &mut |i| issues.push(i));
        assert!(snapshot.is_some());
        assert!(issues.is_empty());
    }
}
