//! Error types for storymatch.
//!
//! This module defines the error types returned by scraping, dataset, and
//! recommendation operations.

/// Error type for scraping and recommendation operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing the dataset CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The listing URL could not be parsed.
    #[error("invalid listing URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Fetching the listing page failed (transport or non-success status).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// No movie items were found in the listing page.
    #[error("no movie items found in page (selector mismatch or empty listing?)")]
    NoMovies,

    /// The dataset contains no usable rows after filtering.
    #[error("dataset is empty after dropping rows without a storyline")]
    EmptyDataset,

    /// The query storyline contains no usable tokens after cleaning.
    #[error("query storyline is empty after cleaning (stopwords only?)")]
    EmptyQuery,
}

/// Result type alias for storymatch operations.
pub type Result<T> = std::result::Result<T, Error>;
