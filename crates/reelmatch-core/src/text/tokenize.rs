//! Tokenisation for the similarity pipeline and the intent classifier.

/// Minimum token length kept by [`analyze`]
pub const MIN_TOKEN_CHARS: usize = 2;

/// Word tokens for vectorising: lower-cased runs of word characters
/// (alphanumerics and `_`) at least [`MIN_TOKEN_CHARS`] long.
///
/// ```
/// use reelmatch_core::text::analyze;
///
/// assert_eq!(analyze("Sci-Fi, a Thriller!"), vec!["sci", "fi", "thriller"]);
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Whitespace tokens for intent rules: lower-cased, surrounding punctuation
/// stripped, inner hyphens and dots kept ("sci-fi", "8.5").
///
/// ```
/// use reelmatch_core::text::query_tokens;
///
/// assert_eq!(query_tokens("Any Sci-Fi after 2010?"), vec!["any", "sci-fi", "after", "2010"]);
/// ```
pub fn query_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
