//! # storymatch
//!
//! Movie recommendations by storyline similarity.
//!
//! Two halves: a scraper that collects title/storyline pairs from an IMDB
//! listing page into a CSV, and a recommender that vectorizes the storylines
//! with TF-IDF and ranks them against a query by cosine similarity.
//!
//! ## Quick Start
//!
//! ```rust
//! use storymatch::{Engine, Movie};
//!
//! let movies = vec![
//!     Movie::new("Inception", "A thief steals secrets through dream-sharing technology."),
//!     Movie::new("The Matrix", "A hacker learns the true nature of reality."),
//! ];
//!
//! let engine = Engine::from_movies(movies)?;
//! let results = engine.recommend("a hacker discovers reality is simulated")?;
//! assert_eq!(results[0].title, "The Matrix");
//! # Ok::<(), storymatch::Error>(())
//! ```
//!
//! The binaries `scrape_movies` and `recommend` wrap these pieces into the
//! two-step CLI workflow: scrape once, query interactively.

mod engine;
mod error;
mod options;
mod patterns;
mod record;

/// Dataset persistence (`title,storyline` CSV).
pub mod dataset;

/// Character encoding detection and decoding for fetched pages.
pub mod encoding;

/// Listing-page fetching and parsing.
pub mod scrape;

/// Cosine similarity and top-N ranking.
pub mod similarity;

/// Storyline cleaning and tokenization.
pub mod text;

/// TF-IDF vectorization.
pub mod tfidf;

// Public API - re-exports
pub use engine::Engine;
pub use error::{Error, Result};
pub use options::Options;
pub use record::{Movie, Recommendation};

/// One-shot convenience: load a dataset CSV and answer a single query.
///
/// Builds the index with default [`Options`] and returns the top matches.
/// Interactive callers should build an [`Engine`] once and reuse it.
pub fn recommend_from_csv<P: AsRef<std::path::Path>>(
    path: P,
    storyline: &str,
) -> Result<Vec<Recommendation>> {
    let movies = dataset::load_csv(path)?;
    let engine = Engine::from_movies(movies)?;
    engine.recommend(storyline)
}
