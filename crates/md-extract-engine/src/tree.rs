//! Owned markdown parse tree.
//!
//! pulldown-cmark only hands out a flat event stream, so [`Node::parse`] folds
//! the `Start`/`End` pairs into a tree. Adjacent text events are merged first,
//! which gives every run of text a single `Text` node.
//!
//! # Tree shape for a small document
//! ```markdown
//! # Title
//!
//! Some *emphasis*
//! ```
//! ```text
//! Document
//! ├── Heading
//! │   └── Text "Title"
//! └── Paragraph
//!     ├── Text "Some "
//!     └── Emph
//!         └── Text "emphasis"
//! ```

use pulldown_cmark::{Event, Parser, Tag, TextMergeStream};

use crate::options::ParseOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    BlockQuote,
    List,
    Item,
    Paragraph,
    Heading,
    HorizontalRule,
    Emph,
    Strong,
    Del,
    Link,
    Image,
    Text,
    HtmlBlock,
    CodeBlock,
    Softbreak,
    Hardbreak,
    Code,
    HtmlSpan,
    Table,
    TableHead,
    TableRow,
    TableCell,
    FootnoteDefinition,
    FootnoteReference,
    TaskListMarker,
    /// Any construct enabled by an extension this tree does not model
    Other,
}

impl NodeKind {
    /// Containers are visited twice by [`Node::walk`], leaves once.
    pub fn is_container(self) -> bool {
        !matches!(
            self,
            NodeKind::Text
                | NodeKind::Code
                | NodeKind::CodeBlock
                | NodeKind::HtmlBlock
                | NodeKind::HtmlSpan
                | NodeKind::Softbreak
                | NodeKind::Hardbreak
                | NodeKind::HorizontalRule
                | NodeKind::FootnoteReference
                | NodeKind::TaskListMarker
        )
    }

    fn from_tag(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { .. } => NodeKind::Heading,
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(_) => NodeKind::CodeBlock,
            Tag::HtmlBlock => NodeKind::HtmlBlock,
            Tag::List(_) => NodeKind::List,
            Tag::Item => NodeKind::Item,
            Tag::FootnoteDefinition(_) => NodeKind::FootnoteDefinition,
            Tag::Table(_) => NodeKind::Table,
            Tag::TableHead => NodeKind::TableHead,
            Tag::TableRow => NodeKind::TableRow,
            Tag::TableCell => NodeKind::TableCell,
            Tag::Emphasis => NodeKind::Emph,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Del,
            Tag::Link { .. } => NodeKind::Link,
            Tag::Image { .. } => NodeKind::Image,
            _ => NodeKind::Other,
        }
    }
}

/// Returned by a [`Node::walk`] visitor to steer the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    GoToNext,
    /// Only meaningful on an entering visit; the node is still left afterwards
    SkipChildren,
    Terminate,
}

#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    literal: String,
    children: Vec<Node>,
}

impl Drop for Node {
    // Free descendants from a heap stack; dropping field by field recurses
    // once per nesting level and overflows on deeply nested quotes.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            literal: String::new(),
            children: Vec::new(),
        }
    }

    fn leaf(kind: NodeKind, literal: &str) -> Self {
        Self {
            kind,
            literal: literal.to_string(),
            children: Vec::new(),
        }
    }

    /// Parse markdown into a tree rooted at a `Document` node. Never fails;
    /// malformed input produces a best-effort tree.
    pub fn parse(markdown: &str, options: &ParseOptions) -> Node {
        let parser = Parser::new_ext(markdown, options.to_pulldown());
        let mut builder = TreeBuilder::new();

        for event in TextMergeStream::new(parser) {
            builder.push(event);
        }

        builder.finish()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Literal text of a leaf, or the content of a code/html block. Empty for
    /// containers.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Pre-order traversal. The visitor receives `entering = true` before a
    /// node's children and, for containers only, `entering = false` after them.
    pub fn walk<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node, bool) -> WalkStatus,
    {
        enum Visit<'a> {
            Enter(&'a Node),
            Leave(&'a Node),
        }

        // Explicit stack so deeply nested quotes/lists can't overflow the call stack
        let mut pending = vec![Visit::Enter(self)];

        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => {
                    let status = visitor(node, true);
                    if status == WalkStatus::Terminate {
                        return;
                    }
                    if node.is_container() {
                        pending.push(Visit::Leave(node));
                    }
                    if status == WalkStatus::GoToNext {
                        pending.extend(node.children.iter().rev().map(Visit::Enter));
                    }
                }
                Visit::Leave(node) => {
                    if visitor(node, false) == WalkStatus::Terminate {
                        return;
                    }
                }
            }
        }
    }
}

/// Folds the pulldown-cmark event stream into nested [`Node`]s.
///
/// `open` holds the containers whose `End` event has not arrived yet; the
/// document root sits underneath them so there is always somewhere to attach.
struct TreeBuilder {
    root: Node,
    open: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Node::new(NodeKind::Document),
            open: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Node {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open.push(Node::new(NodeKind::from_tag(&tag))),
            Event::End(_) => self.close(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.attach(Node::leaf(NodeKind::Code, &code)),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.attach(Node::leaf(NodeKind::HtmlSpan, &html)),
            Event::FootnoteReference(label) => {
                self.attach(Node::leaf(NodeKind::FootnoteReference, &label))
            }
            Event::SoftBreak => self.attach(Node::new(NodeKind::Softbreak)),
            Event::HardBreak => self.attach(Node::new(NodeKind::Hardbreak)),
            Event::Rule => self.attach(Node::new(NodeKind::HorizontalRule)),
            Event::TaskListMarker(checked) => {
                let marker = if checked { "x" } else { " " };
                self.attach(Node::leaf(NodeKind::TaskListMarker, marker))
            }
            _ => {}
        }
    }

    fn attach(&mut self, node: Node) {
        self.current().children.push(node);
    }

    fn close(&mut self) {
        if let Some(node) = self.open.pop() {
            self.attach(node);
        }
    }

    fn text(&mut self, text: &str) {
        let current = self.current();
        if current.kind == NodeKind::CodeBlock {
            current.literal.push_str(text);
        } else {
            current.children.push(Node::leaf(NodeKind::Text, text));
        }
    }

    fn html(&mut self, html: &str) {
        let current = self.current();
        if current.kind == NodeKind::HtmlBlock {
            current.literal.push_str(html);
        } else {
            current.children.push(Node::leaf(NodeKind::HtmlSpan, html));
        }
    }

    fn finish(mut self) -> Node {
        // The parser balances its events, but close anything left open anyway
        while !self.open.is_empty() {
            self.close();
        }
        self.root
    }
}
