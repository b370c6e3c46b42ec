use crate::domain::model::{BookmarkNode, BookmarkTree};
use crate::domain::traits::TreeRenderer;
use anyhow::Result;

const DEFAULT_HEADING: &str = "Bookmarks";
const INDENT: &str = "  ";

/// Renders a tree as a Markdown document: a `# heading` line followed by a nested
/// bullet list.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    /// Overrides the heading; otherwise the tree title (or "Bookmarks") is used.
    pub heading: Option<String>,
}

impl MarkdownRenderer {
    pub fn with_heading(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
        }
    }

    fn heading_for<'a>(&'a self, tree: &'a BookmarkTree) -> &'a str {
        match self.heading.as_deref() {
            Some(h) if !h.trim().is_empty() => h.trim(),
            _ if !tree.title.trim().is_empty() => tree.title.trim(),
            _ => DEFAULT_HEADING,
        }
    }
}

impl TreeRenderer for MarkdownRenderer {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        let mut out = format!("# {}\n", self.heading_for(tree));
        if !tree.is_empty() {
            out.push('\n');
            out.push_str(&render_bullets(&tree.nodes));
        }
        Ok(out)
    }
}

/// The bullet list alone, one line per node, each line newline-terminated.
pub fn render_bullets(nodes: &[BookmarkNode]) -> String {
    let mut out = String::new();
    push_nodes(&mut out, nodes, 0);
    out
}

fn push_nodes(out: &mut String, nodes: &[BookmarkNode], depth: usize) {
    for node in nodes {
        out.push_str(&INDENT.repeat(depth));
        match node {
            BookmarkNode::Bookmark { title, url } => {
                out.push_str(&format!("- [{}]({})\n", escape_link_text(title), link_destination(url)));
            }
            BookmarkNode::Folder { title, children } => {
                out.push_str(&format!("- {title}:\n"));
                push_nodes(out, children, depth + 1);
            }
        }
    }
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// Wraps URLs that a bare `(url)` destination would cut short (spaces, parentheses) in `<...>`.
fn link_destination(url: &str) -> String {
    if url.contains(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>')) {
        format!("<{}>", url.replace('<', "%3C").replace('>', "%3E"))
    } else {
        url.to_string()
    }
}
