//! Record types for the dataset and query output.

use serde::{Deserialize, Serialize};

/// A movie as persisted in the dataset CSV.
///
/// One row per movie, headers `title,storyline`. Written once by the
/// scraper, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title, rank prefix already stripped (`"Dune: Part Two"`,
    /// not `"12. Dune: Part Two"`).
    pub title: String,

    /// Free-text plot summary.
    pub storyline: String,
}

impl Movie {
    /// Create a new movie record.
    #[must_use]
    pub fn new(title: impl Into<String>, storyline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            storyline: storyline.into(),
        }
    }
}

/// A single ranked query result.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Title of the recommended movie.
    pub title: String,

    /// Its storyline, echoed for display.
    pub storyline: String,

    /// Cosine similarity to the query, in `[0.0, 1.0]`.
    pub score: f64,
}
