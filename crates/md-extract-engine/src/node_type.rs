//! Node type names accepted by the extractor.
//!
//! Two sets live here. Every variant of [`NodeType`] is allow-listed, so a
//! name that parses is valid input. Only the variants for which
//! [`NodeType::target_kind`] returns a kind can actually be extracted; the rest
//! are rejected with [`ExtractError::UnsupportedNodeType`] after validation.

use std::fmt;
use std::str::FromStr;

use crate::error::ExtractError;
use crate::tree::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    Heading,
    Paragraph,
    Blockquote,
    List,
    Item,
    Text,
    Emph,
    Strong,
    Code,
    Link,
    Image,
}

impl NodeType {
    /// The allow-list, in declaration order
    pub const ALL: [NodeType; 12] = [
        NodeType::Document,
        NodeType::Heading,
        NodeType::Paragraph,
        NodeType::Blockquote,
        NodeType::List,
        NodeType::Item,
        NodeType::Text,
        NodeType::Emph,
        NodeType::Strong,
        NodeType::Code,
        NodeType::Link,
        NodeType::Image,
    ];

    /// Validate a case-sensitive node type name against the allow-list.
    pub fn parse(name: &str) -> Result<Self, ExtractError> {
        Self::ALL
            .into_iter()
            .find(|node_type| node_type.as_str() == name)
            .ok_or_else(|| ExtractError::InvalidNodeType(name.to_string()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Document => "Document",
            NodeType::Heading => "Heading",
            NodeType::Paragraph => "Paragraph",
            NodeType::Blockquote => "Blockquote",
            NodeType::List => "List",
            NodeType::Item => "Item",
            NodeType::Text => "Text",
            NodeType::Emph => "Emph",
            NodeType::Strong => "Strong",
            NodeType::Code => "Code",
            NodeType::Link => "Link",
            NodeType::Image => "Image",
        }
    }

    /// The tree node kind this name extracts from, or `None` when the name is
    /// accepted but extraction is not implemented for it.
    pub fn target_kind(self) -> Option<NodeKind> {
        match self {
            NodeType::Document => Some(NodeKind::Document),
            NodeType::Heading => Some(NodeKind::Heading),
            NodeType::Paragraph => Some(NodeKind::Paragraph),
            NodeType::Blockquote => Some(NodeKind::BlockQuote),
            NodeType::List => Some(NodeKind::List),
            NodeType::Item => Some(NodeKind::Item),
            NodeType::Text => Some(NodeKind::Text),
            NodeType::Emph => Some(NodeKind::Emph),
            NodeType::Strong => Some(NodeKind::Strong),
            NodeType::Code | NodeType::Link | NodeType::Image => None,
        }
    }

    pub fn is_supported(self) -> bool {
        self.target_kind().is_some()
    }
}

impl FromStr for NodeType {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
