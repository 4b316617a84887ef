//! Recursive directory walker

use std::path::Path;

use crate::comments::comment_for;
use crate::error::{Error, Result};

use super::filter::visible_names;
use super::node::TreeNode;

/// Walks a directory and builds the full node structure in memory.
///
/// Both output modes render from the structure this walker builds, so the
/// text tree and the JSON document can never disagree about what was seen.
pub struct TreeWalker {
    max_depth: Option<usize>,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Bound the walk to `levels` below the root. A directory sitting at the
    /// cutoff is still listed, with empty children; a bound of zero yields
    /// an empty structure.
    pub fn with_max_depth(mut self, levels: usize) -> Self {
        self.max_depth = Some(levels);
        self
    }

    /// Build the ordered node structure for `root`'s contents.
    ///
    /// Fails with [`Error::Access`] as soon as any directory in the walk
    /// cannot be listed; the whole traversal aborts and nothing partial is
    /// returned.
    pub fn walk(&self, root: &Path) -> Result<Vec<TreeNode>> {
        if self.max_depth == Some(0) {
            return Ok(Vec::new());
        }
        self.walk_dir(root, 1)
    }

    fn walk_dir(&self, dir: &Path, depth: usize) -> Result<Vec<TreeNode>> {
        let listing = std::fs::read_dir(dir).map_err(|source| Error::Access {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in listing {
            let entry = entry.map_err(|source| Error::Access {
                path: dir.to_path_buf(),
                source,
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        let mut names = visible_names(names);
        names.sort();

        let descend = self.max_depth.is_none_or(|max| depth < max);

        let mut nodes = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            if path.is_dir() {
                let children = if descend {
                    self.walk_dir(&path, depth + 1)?
                } else {
                    Vec::new()
                };
                nodes.push(TreeNode::Directory { name, children });
            } else {
                // Anything that is not a directory renders as a file,
                // broken symlinks and special files included.
                nodes.push(TreeNode::File {
                    comment: comment_for(&name).to_string(),
                    name,
                });
            }
        }
        Ok(nodes)
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}
