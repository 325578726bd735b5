//! Extraction of movie records from listing-page HTML.
//!
//! IMDB's search results render each film as an
//! `.ipc-metadata-list-summary-item` card carrying the ranked title in
//! `.ipc-title__text` and the plot blurb in `.ipc-html-content-inner-div`.
//! Cards missing either field are skipped; a page yielding no cards at all
//! is an error (selector drift or a bot-wall page).

use dom_query::{Document, Selection};

use crate::error::{Error, Result};
use crate::patterns::{TITLE_RANK_PREFIX, WHITESPACE_NORMALIZE};
use crate::record::Movie;

/// CSS selector for one movie card in the listing.
const ITEM_SELECTOR: &str = ".ipc-metadata-list-summary-item";

/// CSS selector for the ranked title inside a card.
const TITLE_SELECTOR: &str = ".ipc-title__text";

/// CSS selector for the storyline blurb inside a card.
const STORYLINE_SELECTOR: &str = ".ipc-html-content-inner-div";

/// Parse movie records out of listing-page HTML.
///
/// Returns the records in page order. Cards without a usable title or
/// storyline are dropped silently; [`Error::NoMovies`] is returned when the
/// page contains no cards or none of them were usable.
pub fn parse_listing(html: &str) -> Result<Vec<Movie>> {
    let document = Document::from(html);

    let mut movies = Vec::new();
    for node in document.select(ITEM_SELECTOR).nodes() {
        let item = Selection::from(*node);

        let Some(title) = item_title(&item) else {
            continue;
        };
        let Some(storyline) = item_text(&item, STORYLINE_SELECTOR) else {
            continue;
        };

        movies.push(Movie::new(title, storyline));
    }

    if movies.is_empty() {
        return Err(Error::NoMovies);
    }
    Ok(movies)
}

/// Extract and normalize the title of one card, rank prefix removed.
fn item_title(item: &Selection) -> Option<String> {
    let raw = item_text(item, TITLE_SELECTOR)?;
    let title = TITLE_RANK_PREFIX.replace(&raw, "").trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Whitespace-normalized text of the first match of `selector` inside a
/// card, or `None` when absent or blank.
fn item_text(item: &Selection, selector: &str) -> Option<String> {
    let matched = item.select(selector);
    if matched.nodes().is_empty() {
        return None;
    }
    let text = matched.text();
    let normalized = WHITESPACE_NORMALIZE
        .replace_all(text.trim(), " ")
        .into_owned();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, storyline: &str) -> String {
        format!(
            r#"<li class="ipc-metadata-list-summary-item">
                 <h3 class="ipc-title__text">{title}</h3>
                 <div class="ipc-html-content-inner-div">{storyline}</div>
               </li>"#
        )
    }

    #[test]
    fn parses_cards_in_page_order() {
        let html = format!(
            "<html><body><ul>{}{}</ul></body></html>",
            card("1. Dune: Part Two", "Paul unites with the Fremen."),
            card("2. The Wild Robot", "A shipwrecked robot raises a gosling.")
        );

        let movies = parse_listing(&html).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Dune: Part Two");
        assert_eq!(movies[0].storyline, "Paul unites with the Fremen.");
        assert_eq!(movies[1].title, "The Wild Robot");
    }

    #[test]
    fn rank_prefix_is_stripped_from_titles() {
        let html = format!("<html><body>{}</body></html>", card("17. Oppenheimer", "The bomb."));
        let movies = parse_listing(&html).unwrap();
        assert_eq!(movies[0].title, "Oppenheimer");
    }

    #[test]
    fn card_without_storyline_is_skipped() {
        let html = format!(
            r#"<html><body>
                 <li class="ipc-metadata-list-summary-item">
                   <h3 class="ipc-title__text">3. No Blurb</h3>
                 </li>
                 {}
               </body></html>"#,
            card("4. Kept", "Has a plot.")
        );

        let movies = parse_listing(&html).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Kept");
    }

    #[test]
    fn storyline_whitespace_is_normalized() {
        let html = format!(
            "<html><body>{}</body></html>",
            card("5. Spacey", "Lines\n   and    gaps\teverywhere.")
        );
        let movies = parse_listing(&html).unwrap();
        assert_eq!(movies[0].storyline, "Lines and gaps everywhere.");
    }

    #[test]
    fn page_without_cards_is_an_error() {
        assert!(matches!(
            parse_listing("<html><body><p>captcha</p></body></html>"),
            Err(Error::NoMovies)
        ));
    }
}
