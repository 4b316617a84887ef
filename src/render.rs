//! Entry operations
//!
//! The two operations a host program calls: render a directory as a text
//! tree, or render it and also write the equivalent JSON document. Both run
//! one walk and render everything from the structure it built.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::output::{TreeFormatter, write_json};
use crate::tree::{TreeDocument, TreeNode, TreeWalker};

/// Options shared by the rendering operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI colors on stdout.
    pub use_color: bool,
    /// Descend at most this many levels below the root.
    pub max_depth: Option<usize>,
}

/// Base name of the absolutized root path, used for the tree's first line
/// and the JSON `root` field. Empty for paths with no base name, such as
/// the filesystem root.
pub fn root_label(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    // `std::path::absolute` keeps `..` components, so a target like `..`
    // would have no base name. Resolve them lexically first.
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Print the text tree for `root` to stdout.
///
/// Fails with [`Error::Access`] when `root` cannot be listed.
pub fn render_tree_text(root: &Path) -> Result<()> {
    render_tree_text_with(root, RenderOptions::default())
}

/// [`render_tree_text`] with explicit options.
pub fn render_tree_text_with(root: &Path, options: RenderOptions) -> Result<()> {
    let structure = walk(root, options)?;
    print_tree(root, &structure, options)
}

/// Print the text tree for `root` and, when `output` is given, write the
/// JSON document for the same structure.
///
/// Fails fast with [`Error::InvalidTarget`] when `root` is not a directory.
pub fn render_tree_json(root: &Path, output: Option<&Path>) -> Result<()> {
    render_tree_json_with(root, output, RenderOptions::default())
}

/// [`render_tree_json`] with explicit options.
pub fn render_tree_json_with(
    root: &Path,
    output: Option<&Path>,
    options: RenderOptions,
) -> Result<()> {
    if !root.is_dir() {
        return Err(Error::InvalidTarget {
            path: root.to_path_buf(),
        });
    }

    let structure = walk(root, options)?;
    // Text goes out first; a failed JSON write does not roll it back.
    print_tree(root, &structure, options)?;

    if let Some(path) = output {
        let document = TreeDocument {
            root: root_label(root),
            structure,
        };
        write_json(&document, path)?;
        writeln!(io::stdout(), "\n✅ Tree structure saved to {}", path.display())
            .map_err(stdout_error)?;
    }
    Ok(())
}

fn walk(root: &Path, options: RenderOptions) -> Result<Vec<TreeNode>> {
    let mut walker = TreeWalker::new();
    if let Some(levels) = options.max_depth {
        walker = walker.with_max_depth(levels);
    }
    walker.walk(root)
}

fn print_tree(root: &Path, structure: &[TreeNode], options: RenderOptions) -> Result<()> {
    TreeFormatter::new(options.use_color)
        .print(&root_label(root), structure)
        .map_err(stdout_error)
}

fn stdout_error(source: io::Error) -> Error {
    Error::Write {
        target: "stdout".to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_root_label_is_the_base_name() {
        let dir = TestDir::new();
        let project = dir.add_dir("project");
        assert_eq!(root_label(&project), "project");
    }

    #[test]
    fn test_root_label_absolutizes_relative_paths() {
        // `.` has no base name of its own; the label comes from the
        // absolutized path.
        let label = root_label(Path::new("."));
        assert_ne!(label, "");
        assert_ne!(label, ".");
    }

    #[test]
    fn test_root_label_resolves_parent_components() {
        let dir = TestDir::new();
        let project = dir.add_dir("project");
        dir.add_dir("project/sub");

        assert_eq!(root_label(&project.join("sub").join("..")), "project");
    }

    #[cfg(unix)]
    #[test]
    fn test_root_label_of_filesystem_root_is_empty() {
        assert_eq!(root_label(Path::new("/")), "");
    }

    #[test]
    fn test_json_operation_rejects_file_target() {
        let dir = TestDir::new();
        let file = dir.add_file("plain.txt", "contents");

        let err = render_tree_json(&file, None).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { .. }));
    }

    #[test]
    fn test_json_operation_rejects_missing_target() {
        let dir = TestDir::new();
        let gone = dir.path().join("nope");

        let err = render_tree_json(&gone, None).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget { .. }));
    }

    #[test]
    fn test_text_operation_missing_root_is_access_error() {
        let dir = TestDir::new();
        let gone = dir.path().join("nope");

        let err = render_tree_text(&gone).unwrap_err();
        assert!(matches!(err, Error::Access { .. }));
    }

    #[test]
    fn test_unwritable_json_path_is_write_error() {
        let dir = TestDir::new();
        let target = dir.add_dir("tree");
        let out = dir.path().join("no_such_dir").join("out.json");

        let err = render_tree_json(&target, Some(&out)).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn test_json_operation_writes_the_document() {
        let dir = TestDir::new();
        let target = dir.add_dir("tree");
        dir.add_file("tree/main.py", "");
        let out = dir.path().join("out.json");

        render_tree_json(&target, Some(&out)).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("\"root\": \"tree\""));
        assert!(written.contains("\"◀ CLI entry point\""));
    }
}
