use thiserror::Error;

/// Argument errors returned by the extractor. Neither is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("invalid node type: {0}")]
    InvalidNodeType(String),

    /// The name is allow-listed but has no extraction target yet.
    #[error("node type {0} currently unsupported")]
    UnsupportedNodeType(String),
}

impl ExtractError {
    /// The node type name the caller asked for
    pub fn node_type(&self) -> &str {
        match self {
            ExtractError::InvalidNodeType(value) | ExtractError::UnsupportedNodeType(value) => {
                value
            }
        }
    }
}
