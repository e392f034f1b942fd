pub mod error;
pub mod extract;
pub mod node_type;
pub mod options;
pub mod tree;

// Re-export key types for easier usage
pub use error::ExtractError;
pub use extract::{Extractor, extract, extract_with};
pub use node_type::NodeType;
pub use options::ParseOptions;
pub use tree::{Node, NodeKind, WalkStatus};
