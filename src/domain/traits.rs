use crate::domain::error::ConvertError;
use crate::domain::model::BookmarkTree;

/// Result of parsing an export.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub tree: BookmarkTree,
    /// Slash-joined paths of entries displaced by a later same-titled sibling.
    pub overwritten: Vec<String>,
}

pub trait BookmarkParser {
    fn parse(&self, markup: &str) -> Result<ParseOutcome, ConvertError>;
}

pub trait TreeRenderer {
    fn render(&self, tree: &BookmarkTree) -> anyhow::Result<String>;
}
