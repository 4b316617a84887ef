//! Directory tree walking logic
//!
//! This module walks a directory recursively and builds the node structure
//! that both the text and JSON renderers consume.

mod filter;
mod node;
mod walker;

// Re-export public types
pub use filter::{is_visible, visible_names};
pub use node::{TreeDocument, TreeNode};
pub use walker::TreeWalker;
