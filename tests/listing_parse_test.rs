//! Listing-page parsing tests against a realistic IMDB-shaped fixture.

use storymatch::scrape::parse_listing;
use storymatch::Error;

/// A trimmed-down replica of the IMDB search results markup: the card,
/// title, and blurb classes are the real ones, surrounded by the kind of
/// chrome the real page carries.
const LISTING_FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Advanced search</title></head>
<body>
  <nav class="ipc-page-header">Menu</nav>
  <ul class="ipc-metadata-list">
    <li class="ipc-metadata-list-summary-item">
      <div class="ipc-metadata-list-summary-item__c">
        <a href="/title/tt15239678/"><h3 class="ipc-title__text">1. Dune: Part Two</h3></a>
        <span class="metadata">2024 &middot; 2h 46m</span>
        <div class="ipc-html-content-inner-div">Paul Atreides unites with Chani and the Fremen
          while seeking revenge against the conspirators who destroyed his family.</div>
      </div>
    </li>
    <li class="ipc-metadata-list-summary-item">
      <div class="ipc-metadata-list-summary-item__c">
        <a href="/title/tt29623480/"><h3 class="ipc-title__text">2. The Wild Robot</h3></a>
        <div class="ipc-html-content-inner-div">After a shipwreck, an intelligent robot called
          Roz is stranded on an uninhabited island and becomes the adoptive parent of a gosling.</div>
      </div>
    </li>
    <li class="ipc-metadata-list-summary-item">
      <div class="ipc-metadata-list-summary-item__c">
        <a href="/title/tt0000000/"><h3 class="ipc-title__text">3. Plotless Placeholder</h3></a>
      </div>
    </li>
  </ul>
  <footer class="ipc-page-footer">&copy; IMDb</footer>
</body>
</html>"#;

#[test]
fn fixture_yields_cards_with_usable_fields_only() {
    let movies = parse_listing(LISTING_FIXTURE).unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Dune: Part Two");
    assert!(movies[0].storyline.starts_with("Paul Atreides unites"));
    assert_eq!(movies[1].title, "The Wild Robot");
}

#[test]
fn multiline_blurbs_are_collapsed_to_single_spaces() {
    let movies = parse_listing(LISTING_FIXTURE).unwrap();
    assert!(movies[0].storyline.contains("Fremen while seeking revenge"));
    assert!(!movies[0].storyline.contains('\n'));
}

#[test]
fn chrome_only_page_reports_no_movies() {
    let html = "<html><body><nav>Menu</nav><footer>IMDb</footer></body></html>";
    assert!(matches!(parse_listing(html), Err(Error::NoMovies)));
}
