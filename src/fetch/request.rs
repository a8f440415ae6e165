//! Outgoing request construction.

use reqwest::header::{HeaderName, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, RequestBuilder, Url};

/// Builds the GET for one hop of a chain, shaped like a top-level page load
/// so servers pick the same redirect they would serve a visitor.
pub(crate) fn navigation_request(client: &Client, url: Url) -> RequestBuilder {
    client
        .get(url)
        .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .header(ACCEPT_LANGUAGE, "en")
        .header(HeaderName::from_static("sec-fetch-mode"), "navigate")
}
