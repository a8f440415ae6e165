//! Error categorization.
//!
//! Maps errors from the HTTP stack onto the `FetchErrorKind` taxonomy stored
//! on failed records.

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Redirects are followed by hand, so `is_redirect()` only fires if a client
/// with its own redirect policy is used; it still maps to `TooManyRedirects`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_builder() {
        FetchErrorKind::InvalidUrl
    } else if error.is_redirect() {
        FetchErrorKind::TooManyRedirects
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_request() {
        FetchErrorKind::Request
    } else {
        FetchErrorKind::Other
    }
}
