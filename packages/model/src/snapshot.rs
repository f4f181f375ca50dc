use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decode::{decode_node, decode_node_lenient, DecodeProblem};
use crate::error::{ModelError, ModelResult};
use crate::node::Node;
use crate::skeleton::create_initial_skeleton;

/// One immutable version of the whole document
///
/// Cloning is cheap: the root is shared, and edits copy only the path from
/// the root to the node they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Snapshot {
    pub root: Arc<Node>,
}

impl Snapshot {
    pub fn new(root: Node) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Fresh document built by the skeleton factory
    pub fn skeleton() -> Self {
        Self::new(create_initial_skeleton())
    }

    pub fn from_json(source: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> ModelResult<Self> {
        let root = take_root(&mut value)?;
        Ok(Self::new(decode_node(root)?))
    }

    /// Decode as much of the document as possible, returning the problems
    /// that had to be skipped
    ///
    /// Fails only when there is no root object to start from.
    pub fn from_value_lenient(mut value: Value) -> ModelResult<(Self, Vec<DecodeProblem>)> {
        let root = take_root(&mut value)?;
        let (root, problems) = decode_node_lenient(root)?;
        Ok((Self::new(root), problems))
    }

    /// Canonical export format: 2-space pretty-printed JSON
    pub fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<Value> for Snapshot {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn take_root(value: &mut Value) -> ModelResult<Value> {
    match value.get_mut("root").map(Value::take) {
        None | Some(Value::Null) => Err(ModelError::MissingRoot),
        Some(root) => Ok(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_root() {
        let err = Snapshot::from_json("{}").unwrap_err();
        assert_eq!(err.to_string(), "Snapshot missing root");

        let err = Snapshot::from_value(json!({ "root": null })).unwrap_err();
        assert!(matches!(err, ModelError::MissingRoot));
    }

    #[test]
    fn test_deserialize_reports_missing_root() {
        let err = serde_json::from_value::<Snapshot>(json!({ "version": 2 })).unwrap_err();
        assert_eq!(err.to_string(), "Snapshot missing root");
    }

    #[test]
    fn test_node_errors_keep_their_type() {
        let doc = json!({ "root": { "id": "p", "type": "page", "children": [
            { "id": "x", "type": "marquee" }
        ]}});
        let err = Snapshot::from_value(doc.clone()).unwrap_err();
        assert!(matches!(err, ModelError::UnknownNodeType(ref t) if t == "marquee"));

        let (snapshot, problems) = Snapshot::from_value_lenient(doc).unwrap();
        assert!(problems.is_empty());
        assert_eq!(snapshot.root.children[0].type_tag(), "marquee");
    }

    #[test]
    fn test_pretty_json_round_trip() {
        let snapshot = Snapshot::skeleton();
        let json = snapshot.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"root\": {"));

        let restored = Snapshot::from_json(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
