//! Scraping of movie title/storyline pairs from an IMDB-style listing page.
//!
//! Split into [`fetch`] (blocking HTTP with charset-aware decoding) and
//! [`parse`] (dom_query extraction of list items). The scraper binary wires
//! the two together and writes the dataset CSV.

pub mod fetch;
pub mod parse;

pub use fetch::fetch_listing;
pub use parse::parse_listing;

/// The IMDB search page for 2024 feature films, the default scrape target.
pub const DEFAULT_LISTING_URL: &str =
    "https://www.imdb.com/search/title/?title_type=feature&release_date=2024-01-01,2024-12-31";
