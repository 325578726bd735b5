//! Blocking HTTP fetch of listing pages.
//!
//! IMDB rejects requests without a browser-like User-Agent, so one is sent
//! by default. Responses are decoded through [`crate::encoding`] honoring
//! the charset declared by the transport or the document itself.

use std::time::Duration;

use url::Url;

use crate::encoding::decode_html;
use crate::error::{Error, Result};

/// User-Agent sent with listing requests.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:130.0) Gecko/20100101 Firefox/130.0";

/// Request timeout for a single page.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch a listing page and return its decoded HTML.
///
/// The URL is validated up front so a typo'd scheme fails with a clear
/// parse error instead of a transport error. Non-success statuses are
/// reported as [`Error::Fetch`] with the status line.
pub fn fetch_listing(listing_url: &str) -> Result<String> {
    let parsed = Url::parse(listing_url)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::Fetch(format!(
            "unsupported URL scheme '{}'",
            parsed.scheme()
        )));
    }

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let response = client
        .get(parsed.as_str())
        .send()
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch(format!("{listing_url} returned {status}")));
    }

    let transport_charset = charset_from_content_type(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
    );

    let body = response.bytes().map_err(|e| Error::Fetch(e.to_string()))?;
    Ok(decode_html(&body, transport_charset.as_deref()))
}

/// Pull the charset parameter out of a `Content-Type` header value.
fn charset_from_content_type(content_type: Option<&str>) -> Option<String> {
    let content_type = content_type?;
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("charset="))
        .map(|label| label.trim_matches('"').to_string())
}
