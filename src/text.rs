//! Storyline cleaning and tokenization.
//!
//! Queries and corpus rows must pass through the same pipeline or their
//! vectors are not comparable: lowercase, strip non-alphanumerics, split on
//! whitespace, drop stopwords and short tokens.

use std::collections::HashMap;

use crate::options::Options;
use crate::patterns::{NON_ALPHANUMERIC, STOPWORDS, WHITESPACE_NORMALIZE};

/// Normalize raw storyline text to a cleaned, single-spaced form.
///
/// # Examples
///
/// ```
/// use storymatch::text::clean;
///
/// assert_eq!(clean("A thief's  DREAM-sharing tech!"), "a thiefs dreamsharing tech");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, "");
    WHITESPACE_NORMALIZE
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

/// Tokenize a storyline into index terms.
///
/// Applies [`clean`], then filters by `options.min_token_len` and, when
/// `options.strip_stopwords` is set, the english stopword table.
#[must_use]
pub fn tokenize(text: &str, options: &Options) -> Vec<String> {
    clean(text)
        .split_whitespace()
        .filter(|t| t.len() >= options.min_token_len)
        .filter(|t| !options.strip_stopwords || !STOPWORDS.contains(*t))
        .map(str::to_string)
        .collect()
}

/// Count term occurrences in a token stream.
#[must_use]
pub fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
