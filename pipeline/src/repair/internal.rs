//! Misc internal functions used by the repair stages.
//!
//! Lengths here count characters rather than bytes, so that non-ASCII text in a cell (currency
//! symbols and the like) cannot split a code point.

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns the first `n` characters of `s`, or all of `s` when it is shorter.
pub fn leading_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Splits `s` such that the second part holds its last `n` characters.
pub fn split_trailing_chars(s: &str, n: usize) -> (&str, &str) {
    let head_len = char_len(s).saturating_sub(n);
    let idx = s
        .char_indices()
        .nth(head_len)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    s.split_at(idx)
}
