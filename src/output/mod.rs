//! Tree output formatting
//!
//! Formatters for the two output shapes:
//!
//! - `tree` - text tree with box-drawing connectors
//! - `json` - nested JSON document
//!
//! Both consume the same walked node structure, so a single invocation can
//! never show different contents in the two formats.

mod json;
mod tree;

// Re-export public types and functions
pub use json::{to_json_string, write_json};
pub use tree::{TreeFormatter, TreeLine, render_lines};
