//! Outcome classification.

use crate::config::{DETAILS_MISMATCH, DETAILS_SUCCESS};
use crate::mapping::MappingStatus;

/// Normalizes a URL for comparison: drops at most one trailing `/` and
/// lower-cases the rest.
///
/// Nothing else is normalized, so differences in path, query, fragment or
/// scheme still count.
pub fn normalize_for_comparison(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_lowercase()
}

/// Compares the landed URL with the expected one.
///
/// Returns `Success` or `Mismatch` with the matching details string.
pub fn classify(landed_url: &str, expected_url: &str) -> (MappingStatus, &'static str) {
    if normalize_for_comparison(landed_url) == normalize_for_comparison(expected_url) {
        (MappingStatus::Success, DETAILS_SUCCESS)
    } else {
        (MappingStatus::Mismatch, DETAILS_MISMATCH)
    }
}
