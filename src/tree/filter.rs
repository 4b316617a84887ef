//! Hidden-entry filtering for tree walking

/// Entries whose name begins with this marker are hidden.
pub const HIDDEN_MARKER: char = '.';

/// Whether an entry name survives the hidden filter.
pub fn is_visible(name: &str) -> bool {
    !name.starts_with(HIDDEN_MARKER)
}

/// Drop hidden names from a raw listing. No other transformation: order is
/// preserved and an empty listing yields an empty result.
pub fn visible_names(names: Vec<String>) -> Vec<String> {
    names.into_iter().filter(|name| is_visible(name)).collect()
}
