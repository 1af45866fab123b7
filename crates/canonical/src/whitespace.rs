//! Whitespace normalization.
//!
//! Uses Unicode's definition of whitespace (space, tab, newline, carriage
//! return, non-breaking space and the rest of the `White_Space` property).
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  x  =\t\t1\r\n"), "x = 1");
//! ```

/// Trims the edges and collapses every whitespace run to one ASCII space.
///
/// Returns an empty string for empty or whitespace-only input.
///
/// # Examples
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("if  x:\n    pass"), "if x: pass");
/// assert_eq!(collapse_whitespace("a\u{00A0}b"), "a b");
/// assert_eq!(collapse_whitespace(" \n\t "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
