use crate::domain::model::BookmarkTree;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConvertStats {
    pub folders: usize,
    pub bookmarks: usize,
    pub max_depth: usize,
    pub titles_overwritten: usize,
}

impl ConvertStats {
    pub fn from_tree(tree: &BookmarkTree, titles_overwritten: usize) -> Self {
        Self {
            folders: tree.folder_count(),
            bookmarks: tree.bookmark_count(),
            max_depth: tree.max_depth(),
            titles_overwritten,
        }
    }
}
