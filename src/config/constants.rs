//! Configuration constants.
//!
//! Defaults for pacing, timeouts and redirect handling, plus the fixed strings
//! written into verified records.

/// Delay between two consecutive checks, in milliseconds.
///
/// Set to 0 to disable pacing; classification does not depend on it.
pub const DEFAULT_PACING_DELAY_MS: u64 = 200;

/// Per-request timeout in seconds, applied to each hop of a redirect chain.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

// Redirect handling
/// Maximum number of redirect hops to follow.
///
/// Matches the redirect limit of the WHATWG Fetch standard (20), so a chain a
/// browser would follow to the end is followed here too.
pub const MAX_REDIRECT_HOPS: usize = 20;

/// Default User-Agent string for HTTP requests.
///
/// Can be overridden via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Placeholder stored as `final_url` when no final URL could be observed.
pub const UNREACHABLE_SENTINEL: &str = "---";

// Record details
pub const DETAILS_SUCCESS: &str = "Redirected correctly";
pub const DETAILS_MISMATCH: &str = "Landed on unexpected URL";
pub const DETAILS_ERROR: &str = "CORS/Network Error - Verify Manually";

/// Prefix of the default export filename (`redirect_results_YYYY-MM-DD.csv`).
pub const EXPORT_FILE_PREFIX: &str = "redirect_results";
