use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// Markdown extensions enabled when building a parse tree.
///
/// Defaults to tables and strikethrough on, everything else off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub tasklists: bool,
    pub smart_punctuation: bool,
    pub heading_attributes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            footnotes: false,
            tasklists: false,
            smart_punctuation: false,
            heading_attributes: false,
        }
    }
}

impl ParseOptions {
    /// CommonMark only, no extensions
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            footnotes: false,
            tasklists: false,
            smart_punctuation: false,
            heading_attributes: false,
        }
    }

    pub fn to_pulldown(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, self.heading_attributes);
        options
    }
}

impl From<ParseOptions> for Options {
    fn from(options: ParseOptions) -> Self {
        options.to_pulldown()
    }
}
