//! Fixed filename annotations
//!
//! A handful of well-known filenames get a short label printed next to them
//! in the tree. The mapping is a compile-time constant; lookup is an exact,
//! case-sensitive match on the base name with no globbing and no extension
//! matching.

/// Base name to annotation label pairs.
const SPECIAL_COMMENTS: &[(&str, &str)] = &[
    ("main.py", "◀ CLI entry point"),
    ("pyproject.toml", "◀ For installability (recommended)"),
];

/// Annotation for a file's base name, or the empty string when none applies.
pub fn comment_for(name: &str) -> &'static str {
    SPECIAL_COMMENTS
        .iter()
        .find(|(special, _)| *special == name)
        .map_or("", |(_, comment)| comment)
}
