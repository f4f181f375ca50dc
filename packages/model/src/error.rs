use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Snapshot missing root")]
    MissingRoot,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown node type '{0}'")]
    UnknownNodeType(String),

    #[error("Malformed node: {0}")]
    MalformedNode(String),

    #[error("Invalid data for {node_type} node: {message}")]
    InvalidData { node_type: String, message: String },

    #[error("Field `{field}` is not allowed on `{node_type}` nodes")]
    UnexpectedField { field: &'static str, node_type: String },

    #[error("Invalid `{field}` on `{node_type}` node: {message}")]
    InvalidLayout {
        field: &'static str,
        node_type: String,
        message: String,
    },
}

impl ModelError {
    pub fn invalid_data(node_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidData {
            node_type: node_type.into(),
            message: message.into(),
        }
    }
}
