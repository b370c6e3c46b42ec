/// A single entry of a bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Bookmark {
        title: String,
        url: String,
    },
    Folder {
        title: String,
        children: Vec<BookmarkNode>,
    },
}

impl BookmarkNode {
    pub fn bookmark(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Bookmark {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn folder(title: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self::Folder {
            title: title.into(),
            children,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Bookmark { title, .. } | Self::Folder { title, .. } => title,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}

/// Content of the root folder of an export.
///
/// `title` is the text of the root heading; `nodes` are its children in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkTree {
    pub title: String,
    pub nodes: Vec<BookmarkNode>,
}

impl BookmarkTree {
    pub fn new(title: impl Into<String>, nodes: Vec<BookmarkNode>) -> Self {
        Self {
            title: title.into(),
            nodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn folder_count(&self) -> usize {
        self.walk().filter(|n| n.is_folder()).count()
    }

    pub fn bookmark_count(&self) -> usize {
        self.walk().filter(|n| !n.is_folder()).count()
    }

    /// Number of folder levels below the root. A tree holding only leaves has depth 0.
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&BookmarkNode, usize)> = self.nodes.iter().map(|n| (n, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            if let BookmarkNode::Folder { children, .. } = node {
                deepest = deepest.max(depth + 1);
                stack.extend(children.iter().map(|c| (c, depth + 1)));
            }
        }
        deepest
    }

    /// Pre-order iteration over every node (iterative, no recursion).
    pub fn walk(&self) -> impl Iterator<Item = &BookmarkNode> {
        let mut stack: Vec<&BookmarkNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let BookmarkNode::Folder { children, .. } = node {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }
}

/// What to do when a sibling shares the title of an earlier sibling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateTitles {
    /// Later sibling replaces the earlier one at its position.
    #[default]
    Overwrite,
    /// Every sibling is kept in document order.
    KeepAll,
}

/// Accumulates the children of one folder.
#[derive(Debug)]
pub struct TreeBuilder {
    policy: DuplicateTitles,
    nodes: Vec<BookmarkNode>,
}

impl TreeBuilder {
    pub fn new(policy: DuplicateTitles) -> Self {
        Self {
            policy,
            nodes: Vec::new(),
        }
    }

    /// Adds a node. Returns the node it displaced, if any.
    pub fn push(&mut self, node: BookmarkNode) -> Option<BookmarkNode> {
        if self.policy == DuplicateTitles::Overwrite {
            if let Some(slot) = self.nodes.iter_mut().find(|n| n.title() == node.title()) {
                return Some(std::mem::replace(slot, node));
            }
        }
        self.nodes.push(node);
        None
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(self) -> Vec<BookmarkNode> {
        self.nodes
    }
}
