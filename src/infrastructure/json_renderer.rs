use crate::domain::model::{BookmarkNode, BookmarkTree};
use crate::domain::traits::TreeRenderer;
use crate::infrastructure::schema_validator::validate_tree_json;
use anyhow::{anyhow, Result};
use serde_json::{Map, Value};

/// Renders a tree as a nested JSON object: folders become objects, bookmarks become
/// `"title": "url"` pairs. Same-titled siblings collapse to the last one.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl TreeRenderer for JsonRenderer {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        let value = tree_to_value(tree);
        validate_tree_json(&value)?;

        let mut out = serde_json::to_string_pretty(&value)?;
        out.push('\n');
        Ok(out)
    }
}

pub fn tree_to_value(tree: &BookmarkTree) -> Value {
    Value::Object(nodes_to_map(&tree.nodes))
}

fn nodes_to_map(nodes: &[BookmarkNode]) -> Map<String, Value> {
    let mut map = Map::with_capacity(nodes.len());
    for node in nodes {
        match node {
            BookmarkNode::Bookmark { title, url } => {
                map.insert(title.clone(), Value::String(url.clone()));
            }
            BookmarkNode::Folder { title, children } => {
                map.insert(title.clone(), Value::Object(nodes_to_map(children)));
            }
        }
    }
    map
}

/// Reads JSON produced by [`JsonRenderer`] back into a tree titled `title`.
pub fn tree_from_json(raw: &str, title: &str) -> Result<BookmarkTree> {
    let value: Value = serde_json::from_str(raw)?;
    validate_tree_json(&value)?;

    let Value::Object(map) = value else {
        return Err(anyhow!("bookmark JSON must be an object"));
    };
    Ok(BookmarkTree::new(title, map_to_nodes(map)?))
}

fn map_to_nodes(map: Map<String, Value>) -> Result<Vec<BookmarkNode>> {
    map.into_iter()
        .map(|(title, value)| match value {
            Value::String(url) => Ok(BookmarkNode::Bookmark { title, url }),
            Value::Object(children) => Ok(BookmarkNode::Folder {
                title,
                children: map_to_nodes(children)?,
            }),
            other => Err(anyhow!("unexpected value for '{title}': {other}")),
        })
        .collect()
}
