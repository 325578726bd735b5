//! Character encoding handling for fetched listing pages.
//!
//! IMDB serves UTF-8, but the scraper also accepts arbitrary saved pages, so
//! response bytes are decoded through their declared charset rather than
//! assumed to be UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding declared in HTML bytes.
///
/// Checks the `Content-Type` charset from the transport first (if the caller
/// has one), then a `<meta charset>` declaration in the first KiB of the
/// document, and falls back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8], transport_charset: Option<&str>) -> &'static Encoding {
    if let Some(label) = transport_charset {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return encoding;
        }
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);
    if let Some(label) = CHARSET_META_RE.captures(&head).and_then(|c| c.get(1)) {
        if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced rather than rejected; a garbled character
/// in one storyline should not abort a whole scrape.
#[must_use]
pub fn decode_html(html: &[u8], transport_charset: Option<&str>) -> String {
    let encoding = detect_encoding(html, transport_charset);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
