//! Text excerpts for diagnostics.

/// Maximum number of characters shown when quoting input in an error.
pub const PREVIEW_LIMIT: usize = 10;

/// Returns at most the first [`PREVIEW_LIMIT`] characters of `text`.
///
/// Counts characters, not bytes, so multi-byte input is never split.
#[must_use]
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_LIMIT).collect()
}
