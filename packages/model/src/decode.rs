//! # Tree Decoding
//!
//! Builds a [`Node`] tree from untyped JSON in one of two modes:
//!
//! - strict: the first problem comes back as a typed [`ModelError`]
//! - lenient: decoding runs to the end of the tree. Unreadable payloads and
//!   unknown types stay in the tree as [`NodeData::Invalid`] on a node of
//!   type [`NodeType::Unknown`] (or the declared type when it is known), so
//!   validation rules can attribute them. Problems that have no place in
//!   the tree (malformed children, bad reference fields) are returned as
//!   [`DecodeProblem`]s.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};
use crate::layout::Layout;
use crate::node::{Node, NodeType, Styles};
use crate::payload::{InvalidPayload, NodeData};

/// A decoding failure attributed to the node it was found on
#[derive(Debug)]
pub struct DecodeProblem {
    pub node_id: String,
    pub error: ModelError,
}

/// Decode a node and its subtree, failing on the first problem
pub fn decode_node(value: Value) -> ModelResult<Node> {
    Decoder::new(Mode::Strict).node(value)
}

/// Decode a node and its subtree, collecting every problem on the way
///
/// Only a root that is not a JSON object fails outright.
pub fn decode_node_lenient(value: Value) -> ModelResult<(Node, Vec<DecodeProblem>)> {
    let mut decoder = Decoder::new(Mode::Lenient);
    let node = decoder.node(value)?;
    Ok((node, decoder.problems))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Strict,
    Lenient,
}

struct Decoder {
    mode: Mode,
    problems: Vec<DecodeProblem>,
}

impl Decoder {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            problems: Vec::new(),
        }
    }

    /// A problem the tree cannot represent
    fn report(&mut self, node_id: &str, error: ModelError) -> ModelResult<()> {
        match self.mode {
            Mode::Strict => Err(error),
            Mode::Lenient => {
                self.problems.push(DecodeProblem {
                    node_id: node_id.to_string(),
                    error,
                });
                Ok(())
            }
        }
    }

    /// A problem the tree keeps as a placeholder for the validator
    fn placeholder(&self, error: ModelError) -> ModelResult<()> {
        match self.mode {
            Mode::Strict => Err(error),
            Mode::Lenient => Ok(()),
        }
    }

    fn node(&mut self, value: Value) -> ModelResult<Node> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ModelError::MalformedNode(format!(
                    "node must be a JSON object (got {})",
                    other
                )))
            }
        };

        let id = match fields.remove("id") {
            Some(Value::String(id)) => id,
            other => {
                let found = other.map(|v| v.to_string()).unwrap_or_else(|| "nothing".into());
                self.placeholder(ModelError::MalformedNode(format!(
                    "id must be a string (got {})",
                    found
                )))?;
                String::new()
            }
        };

        let tag = match fields.remove("type") {
            Some(Value::String(tag)) => tag,
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let (node_type, data) = self.typed_data(&tag, take(&mut fields, "data"))?;

        let styles = match take(&mut fields, "styles") {
            None => Styles::new(),
            Some(Value::Object(map)) => map.into_iter().collect(),
            Some(other) => {
                self.report(
                    &id,
                    ModelError::MalformedNode(format!("styles must be an object (got {})", other)),
                )?;
                Styles::new()
            }
        };

        let raw_children = match take(&mut fields, "children") {
            None => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.report(&id, ModelError::MalformedNode("children must be an array".into()))?;
                Vec::new()
            }
        };
        let mut children = Vec::with_capacity(raw_children.len());
        for (i, child) in raw_children.into_iter().enumerate() {
            if !child.is_object() {
                self.report(
                    &id,
                    ModelError::MalformedNode(format!("children[{}] must be an object", i)),
                )?;
                continue;
            }
            children.push(Arc::new(self.node(child)?));
        }

        let layout = if node_type == NodeType::Unknown {
            Layout::None
        } else {
            match layout_from_fields(node_type, &mut fields) {
                Ok(layout) => layout,
                Err(error) => {
                    self.report(&id, error)?;
                    Layout::default_for(node_type)
                }
            }
        };

        Ok(Node {
            id,
            node_type,
            data,
            styles,
            children,
            layout,
        })
    }

    fn typed_data(&self, tag: &str, raw: Option<Value>) -> ModelResult<(NodeType, NodeData)> {
        let Ok(node_type) = tag.parse::<NodeType>() else {
            self.placeholder(ModelError::UnknownNodeType(tag.to_string()))?;
            let data = NodeData::Invalid(InvalidPayload {
                type_name: tag.to_string(),
                raw: raw.unwrap_or(Value::Null),
                error: format!("unknown node type '{}'", tag),
            });
            return Ok((NodeType::Unknown, data));
        };

        let Some(raw) = raw else {
            return Ok((node_type, NodeData::empty_for(node_type)));
        };
        match NodeData::from_value(node_type, raw.clone()) {
            Ok(data) => Ok((node_type, data)),
            Err(e) => {
                self.placeholder(ModelError::invalid_data(node_type.as_str(), e.to_string()))?;
                let data = NodeData::Invalid(InvalidPayload {
                    type_name: tag.to_string(),
                    raw,
                    error: e.to_string(),
                });
                Ok((node_type, data))
            }
        }
    }
}

/// Absent and `null` read the same
fn take(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|v| !v.is_null())
}

/// Read `content`, `slots` and `columns`, typed by the owner's type
fn layout_from_fields(node_type: NodeType, fields: &mut Map<String, Value>) -> ModelResult<Layout> {
    let content = take(fields, "content");
    let slots = take(fields, "slots");
    let columns = take(fields, "columns");

    let unexpected = |field: &'static str| ModelError::UnexpectedField {
        field,
        node_type: node_type.to_string(),
    };
    let invalid = |field: &'static str| {
        move |e: serde_json::Error| ModelError::InvalidLayout {
            field,
            node_type: node_type.to_string(),
            message: e.to_string(),
        }
    };

    if content.is_some() && !node_type.accepts_content() {
        return Err(unexpected("content"));
    }
    if slots.is_some() && node_type != NodeType::Header {
        return Err(unexpected("slots"));
    }

    let layout = match (node_type, columns) {
        (NodeType::Footer, Some(value)) => {
            Layout::FooterColumns(serde_json::from_value(value).map_err(invalid("columns"))?)
        }
        (NodeType::Row, Some(value)) => {
            Layout::RowColumns(serde_json::from_value(value).map_err(invalid("columns"))?)
        }
        (_, Some(_)) => return Err(unexpected("columns")),
        (NodeType::Header, None) => match slots {
            Some(value) => Layout::Slots(serde_json::from_value(value).map_err(invalid("slots"))?),
            None => Layout::None,
        },
        (_, None) => match content {
            Some(value) => {
                Layout::Content(serde_json::from_value(value).map_err(invalid("content"))?)
            }
            None => Layout::None,
        },
    };

    Ok(layout)
}
