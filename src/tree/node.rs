//! Node model shared by the text and JSON renderers

use serde::Serialize;

/// One file-system entry in the built structure.
///
/// Serializes with a `"type"` tag of `"directory"` or `"file"`. Files always
/// carry a `comment` field, empty when no annotation applies, so consumers
/// can rely on the key being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Directory {
        name: String,
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        comment: String,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } => name,
            TreeNode::File { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }
}

/// The document written in JSON mode: the root's base name plus the ordered
/// top-level entries. The root itself is not wrapped in a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeDocument {
    pub root: String,
    pub structure: Vec<TreeNode>,
}
