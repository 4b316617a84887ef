//! CLI entry point for dirmap

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirmap::{Error, RenderOptions, render_tree_json_with};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Print a directory's structure as an annotated tree")]
#[command(version)]
struct Args {
    /// Directory to map
    target: PathBuf,

    /// Also save the tree as a JSON document to FILE
    #[arg(long = "json", value_name = "FILE")]
    json: Option<PathBuf>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let options = RenderOptions {
        use_color: should_use_color(args.color),
        max_depth: args.level,
    };

    if let Err(e) = render_tree_json_with(&args.target, args.json.as_deref(), options) {
        match e {
            // The not-a-directory report has always gone to stdout.
            Error::InvalidTarget { .. } => println!("dirmap: {e}"),
            _ => eprintln!("dirmap: {e}"),
        }
        process::exit(1);
    }
}
