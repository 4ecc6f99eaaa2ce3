use crate::constants::PATH_SEPARATOR;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of a structural tree. Documents are referenced by their position
/// in the document set the tree was built from, children by their position
/// in the tree's node arena.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TreeNode {
    pub num: usize,
    pub depth: usize,
    pub parent_node: usize,
    pub index: Vec<usize>,
    pub tag_path: String,
    pub tags: Vec<Tag>,
    pub split_identifier: Option<String>,
    pub split_gain: f64,
    pub children: Vec<usize>,
    pub is_leaf: bool,
}

impl TreeNode {
    /// The root holds every document and has an empty path.
    pub fn root(index: Vec<usize>) -> Self {
        TreeNode {
            num: 0,
            depth: 0,
            parent_node: 0,
            index,
            tag_path: String::new(),
            tags: Vec::new(),
            split_identifier: None,
            split_gain: 0.0,
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Create a leaf below `parent` for the documents selected by `tag`.
    pub fn child(num: usize, parent: &TreeNode, tag: Tag, index: Vec<usize>) -> Self {
        let tag_path = format!("{}{}{}", parent.tag_path, PATH_SEPARATOR, tag);
        let mut tags = parent.tags.clone();
        tags.push(tag);
        TreeNode {
            num,
            depth: parent.depth + 1,
            parent_node: parent.num,
            index,
            tag_path,
            tags,
            split_identifier: None,
            split_gain: 0.0,
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Turn this node into the parent of `children`, split on `identifier`.
    pub fn make_parent_node(&mut self, identifier: String, gain: f64, children: Vec<usize>) {
        self.is_leaf = false;
        self.split_identifier = Some(identifier);
        self.split_gain = gain;
        self.children = children;
    }

    /// The tag that selected this node's documents from its parent's.
    pub fn last_tag(&self) -> Option<&Tag> {
        self.tags.last()
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_leaf {
            write!(f, "{}:leaf={},documents={}", self.num, self.tag_path, self.index.len())
        } else {
            write!(
                f,
                "{}:[{}] gain={},children={:?},documents={}",
                self.num,
                self.split_identifier.as_deref().unwrap_or_default(),
                self.split_gain,
                self.children,
                self.index.len()
            )
        }
    }
}
