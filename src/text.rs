//! Text canonicalization and statistics helpers.

/// Canonicalizes raw input for vectorization: lower-cases, maps every run of
/// non-word characters (anything that is neither alphanumeric nor `_`) to a
/// single space, and trims. Pure and total; idempotent by construction.
pub fn preprocess(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Character count of the original input, as reported in `text_stats`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Whitespace-delimited token count of the original input.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
