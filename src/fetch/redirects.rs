//! HTTP redirect chain resolution.
//!
//! Redirects are followed by hand so every hop ends up in the record, not just
//! the final URL.

use log::{debug, warn};
use reqwest::{StatusCode, Url};

use super::request::navigation_request;
use super::FetchOutcome;
use crate::error_handling::{FetchError, FetchErrorKind};

fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// Follows the redirect chain starting at `start_url`.
///
/// Up to `max_hops` redirects are followed; the request that would follow one
/// more is never sent and the fetch fails with `TooManyRedirects`. A redirect
/// without a `Location` header ends the chain at the URL that returned it.
///
/// # Arguments
///
/// * `start_url` - Absolute http(s) URL to request first
/// * `max_hops` - Maximum number of redirects to follow
/// * `client` - HTTP client with redirects disabled (for manual tracking)
///
/// # Errors
///
/// Returns a `FetchError` if the start URL or a `Location` is not a usable
/// http(s) URL, if a request fails, or if the chain is too long.
pub async fn resolve_redirect_chain(
    start_url: &str,
    max_hops: usize,
    client: &reqwest::Client,
) -> Result<FetchOutcome, FetchError> {
    let mut current = parse_http_url(start_url)?;
    let mut chain: Vec<String> = Vec::new();
    let mut hops = 0usize;

    loop {
        chain.push(current.to_string());
        let resp = navigation_request(client, current.clone())
            .send()
            .await?;
        let status = resp.status();

        if !is_followed_redirect(status) {
            return Ok(FetchOutcome {
                final_url: landed_url(&current),
                status: Some(status.as_u16()),
                chain,
            });
        }

        let Some(location) = resp.headers().get(reqwest::header::LOCATION) else {
            warn!(
                "Redirect status {} for {} but no Location header",
                status.as_u16(),
                current
            );
            return Ok(FetchOutcome {
                final_url: landed_url(&current),
                status: Some(status.as_u16()),
                chain,
            });
        };

        if hops == max_hops {
            return Err(FetchError::new(
                FetchErrorKind::TooManyRedirects,
                format!("more than {max_hops} redirects starting at {start_url}"),
            ));
        }
        hops += 1;

        let location = location.to_str().map_err(|e| {
            FetchError::new(
                FetchErrorKind::InvalidUrl,
                format!("unreadable Location header from {current}: {e}"),
            )
        })?;
        let next = current.join(location)?;
        if !matches!(next.scheme(), "http" | "https") {
            return Err(FetchError::new(
                FetchErrorKind::InvalidUrl,
                format!("redirect to unsupported scheme: {next}"),
            ));
        }
        debug!("{} -> {} ({})", current, next, status.as_u16());
        current = next;
    }
}

/// The URL a browser reports after navigating to `url`: the fragment never
/// reaches the server, so it is not part of where the request landed.
fn landed_url(url: &Url) -> String {
    let mut landed = url.clone();
    landed.set_fragment(None);
    landed.to_string()
}

fn parse_http_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::new(
            FetchErrorKind::InvalidUrl,
            format!("unsupported scheme '{other}' in {raw}"),
        )),
    }
}
