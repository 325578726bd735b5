//! Scrape movie titles and storylines from an IMDB-style listing page into
//! a CSV dataset.
//!
//! Usage: `scrape_movies [url-or-html-file] [output.csv]`
//!
//! Defaults to the IMDB 2024 feature-film search page and `movies.csv`.
//! When the first argument is an existing file it is read as saved HTML
//! instead of fetched - useful because pages saved from a browser include
//! the JS-rendered cards a plain GET may not.

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use storymatch::dataset;
use storymatch::encoding::decode_html;
use storymatch::scrape::{fetch_listing, parse_listing, DEFAULT_LISTING_URL};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let source = args.next().unwrap_or_else(|| DEFAULT_LISTING_URL.to_string());
    let output = args.next().unwrap_or_else(|| "movies.csv".to_string());

    let html = if Path::new(&source).is_file() {
        println!("Reading saved page {source}...");
        decode_html(&fs::read(&source)?, None)
    } else {
        println!("Fetching {source}...");
        fetch_listing(&source)?
    };

    let movies = parse_listing(&html)?;
    for movie in &movies {
        println!("Scraped: {}", movie.title);
    }

    dataset::save_csv(&output, &movies)?;
    println!("\nScraping complete. Saved {} movies to {output}", movies.len());

    Ok(())
}
