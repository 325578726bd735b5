//! Configuration options for the recommendation engine.
//!
//! The `Options` struct controls tokenization and ranking behavior. Defaults
//! reproduce the classic TF-IDF recommender setup: five results, english
//! stopwords removed, no similarity cutoff.

/// Configuration options for recommendation.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use storymatch::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     top_n: 10,
///     min_score: 0.05,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of recommendations returned per query.
    ///
    /// Default: `5`
    pub top_n: usize,

    /// Minimum token length to keep during tokenization.
    ///
    /// Single-letter leftovers (mostly from stripped contractions) carry no
    /// signal and are dropped.
    ///
    /// Default: `2`
    pub min_token_len: usize,

    /// Remove english stopwords during tokenization.
    ///
    /// Default: `true`
    pub strip_stopwords: bool,

    /// Minimum cosine similarity for a movie to be returned.
    ///
    /// With the default of `0.0`, a query always yields `top_n` results when
    /// the dataset is large enough, even if some share no terms with the
    /// query at all. Raise this to suppress zero-overlap filler.
    ///
    /// Default: `0.0`
    pub min_score: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            top_n: 5,
            min_token_len: 2,
            strip_stopwords: true,
            min_score: 0.0,
        }
    }
}
