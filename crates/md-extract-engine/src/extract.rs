use crate::error::ExtractError;
use crate::node_type::NodeType;
use crate::options::ParseOptions;
use crate::tree::{Node, NodeKind, WalkStatus};

/// Extract the literal text of the first child of every `node_type` node in
/// `markdown`, in document order. Uses the default parser extensions.
///
/// # Errors
/// * [`ExtractError::InvalidNodeType`] when `node_type` is not allow-listed
/// * [`ExtractError::UnsupportedNodeType`] for `Code`, `Link` and `Image`
///
/// Both are reported before any parsing happens.
pub fn extract(markdown: &str, node_type: &str) -> Result<Vec<String>, ExtractError> {
    extract_with(markdown, node_type, &ParseOptions::default())
}

/// Like [`extract`], with explicit parser extensions.
pub fn extract_with(
    markdown: &str,
    node_type: &str,
    options: &ParseOptions,
) -> Result<Vec<String>, ExtractError> {
    let node_type = NodeType::parse(node_type)?;
    let target = node_type
        .target_kind()
        .ok_or_else(|| ExtractError::UnsupportedNodeType(node_type.to_string()))?;

    let root = Node::parse(markdown, options);
    let literals = first_child_literals(&root, target);

    log::debug!(
        "extracted {} {} literal(s) from {} bytes of markdown",
        literals.len(),
        node_type,
        markdown.len()
    );
    Ok(literals)
}

/// Collect the non-empty literal of the first child of each `target` node
fn first_child_literals(root: &Node, target: NodeKind) -> Vec<String> {
    let mut literals = Vec::new();

    root.walk(|node, entering| {
        if entering && node.kind() == target {
            match node.first_child() {
                Some(child) if !child.literal().is_empty() => {
                    literals.push(child.literal().to_string());
                }
                _ => log::trace!("skipping {:?} without literal first child", node.kind()),
            }
        }
        WalkStatus::GoToNext
    });

    literals
}

/// Reusable extractor bound to a set of parser extensions.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    options: ParseOptions,
}

impl Extractor {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn extract(&self, markdown: &str, node_type: &str) -> Result<Vec<String>, ExtractError> {
        extract_with(markdown, node_type, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Bogus", "")]
    #[case("Bogus", "# Hello")]
    #[case("heading", "# Hello")]
    #[case("Emphasis", "*x*")]
    #[case("", "text")]
    fn test_invalid_node_type(#[case] node_type: &str, #[case] markdown: &str) {
        assert_eq!(
            extract(markdown, node_type),
            Err(ExtractError::InvalidNodeType(node_type.to_string()))
        );
    }

    #[rstest]
    #[case("Code", "")]
    #[case("Code", "`inline` code")]
    #[case("Link", "[site](https://example.com)")]
    #[case("Image", "![alt](pic.png)")]
    fn test_unsupported_node_type(#[case] node_type: &str, #[case] markdown: &str) {
        assert_eq!(
            extract(markdown, node_type),
            Err(ExtractError::UnsupportedNodeType(node_type.to_string()))
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(extract("# Hello", "Heading").unwrap(), vec!["Hello"]);
    }

    #[test]
    fn test_paragraph() {
        let result = extract("plain paragraph text", "Paragraph").unwrap();
        assert!(result.contains(&"plain paragraph text".to_string()));
    }

    #[test]
    fn test_strong() {
        assert_eq!(extract("**bold** and normal", "Strong").unwrap(), vec!["bold"]);
    }

    #[test]
    fn test_emph() {
        assert_eq!(
            extract("*one* and _two_", "Emph").unwrap(),
            vec!["one", "two"]
        );
    }

    #[rstest]
    #[case("Document")]
    #[case("Heading")]
    #[case("Paragraph")]
    #[case("Blockquote")]
    #[case("List")]
    #[case("Item")]
    #[case("Text")]
    #[case("Emph")]
    #[case("Strong")]
    fn test_empty_markdown_yields_nothing(#[case] node_type: &str) {
        assert_eq!(extract("", node_type).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_document_order() {
        let markdown = "# First\n\nbody\n\n## Second\n\n### Third\n";
        assert_eq!(
            extract(markdown, "Heading").unwrap(),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_nested_matches_in_preorder() {
        let markdown = "*outer **inner** tail*\n\n**later**";
        assert_eq!(extract(markdown, "Emph").unwrap(), vec!["outer "]);
        assert_eq!(extract(markdown, "Strong").unwrap(), vec!["inner", "later"]);
    }

    #[test]
    fn test_first_child_without_literal_is_skipped() {
        // Paragraph's first child is Strong, which carries no literal itself
        assert_eq!(
            extract("**bold** and normal", "Paragraph").unwrap(),
            Vec::<String>::new()
        );
        // Blockquote's first child is a Paragraph container
        assert_eq!(extract("> quoted", "Blockquote").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_node_without_children_is_skipped() {
        assert_eq!(extract("#\n\n# Named", "Heading").unwrap(), vec!["Named"]);
    }

    #[test]
    fn test_text_nodes_are_leaves() {
        assert_eq!(
            extract("just some text", "Text").unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_tight_list_items() {
        assert_eq!(
            extract("- first\n- second\n- third", "Item").unwrap(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_idempotent() {
        let markdown = "# A\n\n*b*\n\n- c";
        for node_type in ["Heading", "Emph", "Item", "Document"] {
            assert_eq!(
                extract(markdown, node_type),
                extract(markdown, node_type)
            );
        }
    }

    #[test]
    fn test_deeply_nested_quotes() {
        let markdown = ">".repeat(200_000) + " deep";

        assert_eq!(extract(&markdown, "Paragraph").unwrap(), vec!["deep"]);
        assert_eq!(
            extract(&markdown, "Blockquote").unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_extractor_uses_its_options() {
        let markdown = "| Head |\n| ---- |\n| cell |\n\n# Title";
        let commonmark = Extractor::new(ParseOptions::commonmark());
        assert_eq!(commonmark.options(), &ParseOptions::commonmark());

        // Without tables the pipe rows are an ordinary paragraph split by soft breaks
        assert_eq!(
            commonmark.extract(markdown, "Paragraph").unwrap(),
            vec!["| Head |"]
        );
        assert_eq!(
            Extractor::default().extract(markdown, "Paragraph").unwrap(),
            Vec::<String>::new()
        );
    }
}
