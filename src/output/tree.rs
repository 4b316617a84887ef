//! Text tree formatter
//!
//! Renders the walked node structure as an indented tree with box-drawing
//! connectors, either into a `String` or straight to stdout with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

const MID_CONNECTOR: &str = "├── ";
const LAST_CONNECTOR: &str = "└── ";
const MID_SPACER: &str = "│   ";
const LAST_SPACER: &str = "    ";

/// One line of the rendered tree, before any styling is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub connector: &'static str,
    pub text: String,
    pub annotation: String,
    pub is_dir: bool,
}

/// Flatten a node sequence into render lines, depth-first pre-order.
///
/// Connector choice lives here and nowhere else; `format` and `print`
/// differ only in styling.
pub fn render_lines(nodes: &[TreeNode]) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    collect(nodes, "", &mut lines);
    lines
}

fn collect(nodes: &[TreeNode], prefix: &str, lines: &mut Vec<TreeLine>) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        let connector = if is_last { LAST_CONNECTOR } else { MID_CONNECTOR };
        match node {
            TreeNode::Directory { name, children } => {
                lines.push(TreeLine {
                    prefix: prefix.to_string(),
                    connector,
                    text: format!("{name}/"),
                    annotation: String::new(),
                    is_dir: true,
                });
                let spacer = if is_last { LAST_SPACER } else { MID_SPACER };
                collect(children, &format!("{prefix}{spacer}"), lines);
            }
            TreeNode::File { name, comment } => {
                lines.push(TreeLine {
                    prefix: prefix.to_string(),
                    connector,
                    text: name.clone(),
                    annotation: comment.clone(),
                    is_dir: false,
                });
            }
        }
    }
}

/// Formatter for the text tree output.
pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render the tree to a plain string. `print` with color disabled
    /// writes exactly these bytes.
    pub fn format(&self, root: &str, nodes: &[TreeNode]) -> String {
        let mut output = String::new();
        output.push_str(root);
        output.push_str("/\n");
        for line in render_lines(nodes) {
            output.push_str(&line.prefix);
            output.push_str(line.connector);
            output.push_str(&line.text);
            if !line.annotation.is_empty() {
                output.push(' ');
                output.push_str(&line.annotation);
            }
            output.push('\n');
        }
        output
    }

    /// Print the tree to stdout, coloring directory names and annotations
    /// when color is enabled.
    pub fn print(&self, root: &str, nodes: &[TreeNode]) -> io::Result<()> {
        // ColorChoice::Auto second-guesses the caller via TERM, so the
        // caller's decision maps straight to Always or Never.
        let choice = if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{root}/")?;
        stdout.reset()?;
        writeln!(stdout)?;

        for line in render_lines(nodes) {
            write!(stdout, "{}{}", line.prefix, line.connector)?;
            if line.is_dir {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(stdout, "{}", line.text)?;
                stdout.reset()?;
            } else {
                write!(stdout, "{}", line.text)?;
                if !line.annotation.is_empty() {
                    write!(stdout, " ")?;
                    stdout
                        .set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
                    write!(stdout, "{}", line.annotation)?;
                    stdout.reset()?;
                }
            }
            writeln!(stdout)?;
        }
        Ok(())
    }
}
