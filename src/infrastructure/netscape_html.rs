//! Parser for the Netscape bookmark file format exported by Firefox, Chrome and Edge.
//!
//! ```text
//! <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bookmarks Toolbar</H3>
//! <DL><p>
//!     <DT><H3>Work</H3>
//!     <DL><p>
//!         <DT><A HREF="https://docs.example">Docs</A>
//!     </DL><p>
//!     <DT><A HREF="https://news.example">News</A>
//! </DL><p>
//! ```
//!
//! The HTML5 tree builder nests each `<DL>` inside the `<DT>` that holds its
//! heading, so a folder is a `<DT>` whose `<H3>` is followed by a sibling `<DL>`.

use crate::domain::error::ConvertError;
use crate::domain::model::{BookmarkNode, BookmarkTree, DuplicateTitles, TreeBuilder};
use crate::domain::traits::{BookmarkParser, ParseOutcome};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

const ROOT_MARKER_ATTR: &str = "personal_toolbar_folder";

static FOLDER_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3").expect("valid heading selector"));

#[derive(Debug, Clone, Default)]
pub struct NetscapeHtmlParser {
    pub duplicates: DuplicateTitles,
}

impl NetscapeHtmlParser {
    pub fn new(duplicates: DuplicateTitles) -> Self {
        Self { duplicates }
    }

    fn walk_list(&self, list: ElementRef<'_>, path: &str, overwritten: &mut Vec<String>) -> Vec<BookmarkNode> {
        let mut builder = TreeBuilder::new(self.duplicates);

        for entry in child_elements(list).filter(|e| e.value().name() == "dt") {
            let mark = overwritten.len();
            let Some(node) = self.parse_entry(entry, path, overwritten) else {
                continue;
            };
            let node_path = join_path(path, node.title());
            if builder.push(node).is_some() {
                // Reports from inside the displaced subtree no longer describe the output.
                let fresh = overwritten.split_off(mark);
                let displaced_prefix = format!("{node_path}/");
                overwritten.retain(|p| !p.starts_with(&displaced_prefix));
                overwritten.extend(fresh);
                overwritten.push(node_path);
            }
        }

        builder.finish()
    }

    fn parse_entry(&self, entry: ElementRef<'_>, path: &str, overwritten: &mut Vec<String>) -> Option<BookmarkNode> {
        let first = child_elements(entry).find(|e| matches!(e.value().name(), "h3" | "a"))?;

        if first.value().name() == "h3" {
            let title = element_text(first);
            let children = match following_list(first) {
                Some(list) => self.walk_list(list, &join_path(path, &title), overwritten),
                None => Vec::new(),
            };
            return Some(BookmarkNode::Folder { title, children });
        }

        let url = first.value().attr("href")?;
        Some(BookmarkNode::bookmark(element_text(first), url))
    }
}

impl BookmarkParser for NetscapeHtmlParser {
    fn parse(&self, markup: &str) -> Result<ParseOutcome, ConvertError> {
        let document = Html::parse_document(markup);

        let root_heading = document
            .select(&FOLDER_HEADING)
            .find(|h| {
                h.value()
                    .attr(ROOT_MARKER_ATTR)
                    .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
            })
            .ok_or_else(|| {
                ConvertError::Structure("no folder heading marked PERSONAL_TOOLBAR_FOLDER".to_string())
            })?;

        let title = element_text(root_heading);
        let root_list = following_list(root_heading).ok_or_else(|| {
            ConvertError::Structure(format!("root folder '{title}' has no bookmark list"))
        })?;

        let mut overwritten = Vec::new();
        let nodes = self.walk_list(root_list, &title, &mut overwritten);

        Ok(ParseOutcome {
            tree: BookmarkTree::new(title, nodes),
            overwritten,
        })
    }
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// The first `<DL>` among the element siblings after `heading`, stopping at the next heading.
fn following_list(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|e| e.value().name() != "h3")
        .find(|e| e.value().name() == "dl")
}

/// Text content with runs of whitespace (including newlines) collapsed to one space.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_path(parent: &str, title: &str) -> String {
    format!("{parent}/{title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(body: &str) -> String {
        format!(
            r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>
<DL><p>
    <DT><H3 ADD_DATE="1" PERSONAL_TOOLBAR_FOLDER="true">Bookmarks Toolbar</H3>
    <DL><p>
{body}
    </DL><p>
</DL>"#
        )
    }

    fn parse(body: &str, duplicates: DuplicateTitles) -> ParseOutcome {
        NetscapeHtmlParser::new(duplicates)
            .parse(&export(body))
            .expect("parse")
    }

    #[test]
    fn two_level_export_yields_single_folder() {
        let out = parse(
            r#"<DT><H3>Work</H3>
<DL><p>
    <DT><A HREF="https://a.example" ADD_DATE="1">A</A>
    <DT><A HREF="https://b.example">B</A>
</DL><p>"#,
            DuplicateTitles::Overwrite,
        );

        assert_eq!(out.tree.title, "Bookmarks Toolbar");
        assert_eq!(
            out.tree.nodes,
            vec![BookmarkNode::folder(
                "Work",
                vec![
                    BookmarkNode::bookmark("A", "https://a.example"),
                    BookmarkNode::bookmark("B", "https://b.example"),
                ]
            )]
        );
        assert!(out.overwritten.is_empty());
    }

    #[test]
    fn leaves_around_folders_are_kept_in_order() {
        let out = parse(
            r#"<DT><A HREF="https://before">Before</A>
<DT><H3>F1</H3>
<DL><p>
    <DT><A HREF="https://in1">In1</A>
</DL><p>
<DT><A HREF="https://between">Between</A>
<DT><H3>F2</H3>
<DL><p>
</DL><p>
<DT><A HREF="https://after">After</A>"#,
            DuplicateTitles::Overwrite,
        );

        let titles: Vec<&str> = out.tree.nodes.iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["Before", "F1", "Between", "F2", "After"]);
        assert_eq!(out.tree.nodes[3], BookmarkNode::folder("F2", vec![]));
    }

    #[test]
    fn nested_folders_recurse() {
        let out = parse(
            r#"<DT><H3>L1</H3>
<DL><p>
    <DT><H3>L2</H3>
    <DL><p>
        <DT><H3>L3</H3>
        <DL><p>
            <DT><A HREF="https://deep">Deep</A>
        </DL><p>
    </DL><p>
</DL><p>"#,
            DuplicateTitles::Overwrite,
        );

        assert_eq!(out.tree.max_depth(), 3);
        assert_eq!(out.tree.bookmark_count(), 1);
    }

    #[test]
    fn duplicate_titles_follow_policy() {
        let body = r#"<DT><H3>Same</H3>
<DL><p>
    <DT><A HREF="https://first">First</A>
</DL><p>
<DT><H3>Same</H3>
<DL><p>
    <DT><A HREF="https://second">Second</A>
</DL><p>"#;

        let out = parse(body, DuplicateTitles::Overwrite);
        assert_eq!(
            out.tree.nodes,
            vec![BookmarkNode::folder(
                "Same",
                vec![BookmarkNode::bookmark("Second", "https://second")]
            )]
        );
        assert_eq!(out.overwritten, vec!["Bookmarks Toolbar/Same".to_string()]);

        let out = parse(body, DuplicateTitles::KeepAll);
        assert_eq!(out.tree.nodes.len(), 2);
        assert!(out.overwritten.is_empty());
    }

    #[test]
    fn entities_are_decoded_and_text_trimmed() {
        let out = parse(
            r#"<DT><A HREF="https://x.example/?a=1&amp;b=2">  Tom &amp; Jerry ünïcode </A>"#,
            DuplicateTitles::Overwrite,
        );
        assert_eq!(
            out.tree.nodes,
            vec![BookmarkNode::bookmark("Tom & Jerry ünïcode", "https://x.example/?a=1&b=2")]
        );
    }

    #[test]
    fn multi_line_titles_collapse_to_one_line() {
        let out = parse(
            "<DT><H3>Multi\n   line</H3>\n<DL><p>\n<DT><A HREF=\"https://b\">Book\nmarklet</A>\n</DL><p>",
            DuplicateTitles::Overwrite,
        );
        assert_eq!(
            out.tree.nodes,
            vec![BookmarkNode::folder(
                "Multi line",
                vec![BookmarkNode::bookmark("Book marklet", "https://b")]
            )]
        );
    }

    #[test]
    fn overwritten_reports_skip_displaced_subtrees() {
        let out = parse(
            r#"<DT><H3>Same</H3>
<DL><p>
    <DT><A HREF="https://d1">d</A>
    <DT><A HREF="https://d2">d</A>
</DL><p>
<DT><H3>Same</H3>
<DL><p>
    <DT><A HREF="https://e1">e</A>
    <DT><A HREF="https://e2">e</A>
</DL><p>"#,
            DuplicateTitles::Overwrite,
        );

        assert_eq!(
            out.tree.nodes,
            vec![BookmarkNode::folder(
                "Same",
                vec![BookmarkNode::bookmark("e", "https://e2")]
            )]
        );
        assert_eq!(
            out.overwritten,
            vec![
                "Bookmarks Toolbar/Same/e".to_string(),
                "Bookmarks Toolbar/Same".to_string(),
            ]
        );
    }

    #[test]
    fn separators_and_anchors_without_href_are_skipped() {
        let out = parse(
            r#"<HR>
<DT><A>No link</A>
<DD>a description
<DT><A HREF="https://ok">Ok</A>"#,
            DuplicateTitles::Overwrite,
        );
        assert_eq!(out.tree.nodes, vec![BookmarkNode::bookmark("Ok", "https://ok")]);
    }

    #[test]
    fn empty_root_folder_gives_empty_tree() {
        let out = parse("", DuplicateTitles::Overwrite);
        assert!(out.tree.is_empty());
    }

    #[test]
    fn missing_root_marker_is_structure_error() {
        let html = r#"<DL><p><DT><H3>Plain</H3><DL><p><DT><A HREF="https://x">x</A></DL><p></DL>"#;
        let err = NetscapeHtmlParser::default().parse(html).unwrap_err();
        assert!(matches!(err, ConvertError::Structure(_)));

        let err = NetscapeHtmlParser::default().parse("").unwrap_err();
        assert!(matches!(err, ConvertError::Structure(_)));
    }

    #[test]
    fn root_marker_without_list_is_structure_error() {
        let html = r#"<DL><p><DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Toolbar</H3></DL>"#;
        let err = NetscapeHtmlParser::default().parse(html).unwrap_err();
        assert!(err.to_string().contains("Toolbar"));
    }
}
