use md_extract_engine::{ExtractError, Extractor, NodeType, extract};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[rstest]
#[case("Heading", "guide_headings")]
#[case("Strong", "guide_strong")]
#[case("Item", "guide_items")]
#[case("Emph", "guide_emph")]
fn fixture_guide(#[case] node_type: &str, #[case] name: &str) {
    let result = extract(&fixture("guide"), node_type).unwrap();
    insta::assert_yaml_snapshot!(name, result);
}

#[test]
fn fixture_guide_paragraphs_start_with_text() {
    let result = extract(&fixture("guide"), "Paragraph").unwrap();

    assert_eq!(
        result,
        vec![
            "This guide shows the ",
            "Run the installer and ",
            "Keep a backup",
            "Pass a node type and a file. The ",
        ]
    );
}

#[test]
fn every_unlisted_name_is_invalid_before_parsing() {
    for name in ["document", "Header", "Emphasis", "CodeBlock", "Table"] {
        assert_eq!(
            extract(&fixture("guide"), name),
            Err(ExtractError::InvalidNodeType(name.to_string()))
        );
    }
}

#[test]
fn every_listed_name_either_extracts_or_is_unsupported() {
    let markdown = fixture("guide");

    for node_type in NodeType::ALL {
        let result = extract(&markdown, node_type.as_str());
        if node_type.is_supported() {
            assert!(result.is_ok(), "{node_type} should extract");
        } else {
            assert_eq!(
                result,
                Err(ExtractError::UnsupportedNodeType(node_type.to_string()))
            );
        }
    }
}

#[test]
fn concurrent_calls_match_serial_result() {
    let markdown = fixture("guide");
    let extractor = Extractor::default();
    let expected = extractor.extract(&markdown, "Heading").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| extractor.extract(&markdown, "Heading").unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
