//! Common helper functions for output formatting.

use owo_colors::OwoColorize;

/// Number of fingerprint characters shown in tables.
const ID_PREFIX_LEN: usize = 8;

/// Truncates a fingerprint for display.
pub fn truncate_id(id: &str) -> String {
    id.chars().take(ID_PREFIX_LEN).collect()
}

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Quotes a stored value for display, making empty and whitespace-only
/// strings visible.
pub fn quote_value(s: &str) -> String {
    format!("{s:?}")
}

/// Formats the palindrome flag for display.
pub fn format_palindrome(is_palindrome: bool, use_colors: bool) -> String {
    let label = if is_palindrome { "yes" } else { "no" };

    if use_colors && is_palindrome {
        label.green().to_string()
    } else {
        label.to_string()
    }
}

/// Formats a single character for display in frequency listings.
pub fn format_char(c: char) -> String {
    match c {
        ' ' => "' '".to_string(),
        c if c.is_whitespace() || c.is_control() => c.escape_default().to_string(),
        c => c.to_string(),
    }
}
