use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Node id used for issues that concern the snapshot as a whole
pub const SNAPSHOT_ISSUE_ID: &str = "snapshot";

/// A single violation reported in collector mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub node_id: String,
    pub reason: String,
}

impl Issue {
    pub fn new(node_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            reason: reason.into(),
        }
    }
}

/// Failure raised in throw mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid node({id}): {}", .reasons.join("; "))]
    InvalidNode { id: String, reasons: Vec<String> },

    #[error("Snapshot missing root")]
    MissingRoot,

    #[error("Duplicate node id detected: {0}")]
    DuplicateId(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// The issues this error stands for, in collector-mode shape
    pub fn into_issues(self) -> Vec<Issue> {
        match self {
            ValidationError::InvalidNode { id, reasons } => reasons
                .into_iter()
                .map(|reason| Issue::new(id.clone(), reason))
                .collect(),
            ValidationError::DuplicateId(id) => {
                let reason = format!("Duplicate node id detected: {}", id);
                vec![Issue::new(id, reason)]
            }
            other => vec![Issue::new(SNAPSHOT_ISSUE_ID, other.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_node_message() {
        let err = ValidationError::InvalidNode {
            id: "h1".into(),
            reasons: vec!["data.text is required".into(), "data.level is required".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid node(h1): data.text is required; data.level is required"
        );
    }

    #[test]
    fn test_issue_json_shape() {
        let issue = Issue::new("n1", "bad");
        assert_eq!(
            serde_json::to_string(&issue).unwrap(),
            r#"{"nodeId":"n1","reason":"bad"}"#
        );
    }
}
