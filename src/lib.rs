//! Dirmap - print a directory's structure as an annotated tree, with optional JSON output

pub mod comments;
pub mod error;
pub mod output;
pub mod render;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use comments::comment_for;
pub use error::{Error, Result};
pub use output::{TreeFormatter, to_json_string, write_json};
pub use render::{
    RenderOptions, render_tree_json, render_tree_json_with, render_tree_text,
    render_tree_text_with, root_label,
};
pub use tree::{TreeDocument, TreeNode, TreeWalker};
