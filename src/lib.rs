//! redirect_verifier library: checks that redirect mappings land where expected
//!
//! After a site migration every old URL should redirect to a known new URL.
//! This library takes a list of `old -> new` mappings (CSV, tab-separated,
//! column-aligned or arrow-annotated, mixed freely), resolves relative paths
//! against a source and a target base domain, follows the redirects of each
//! old URL and classifies where it landed:
//!
//! - `success`: landed on the expected URL (case and one trailing slash ignored)
//! - `mismatch`: landed somewhere else
//! - `error`: no final URL could be observed; verify by hand
//!
//! # Example
//!
//! ```no_run
//! use redirect_verifier::{run_verification, BaseDomains, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: BaseDomains::new(Some("https://old.example"), Some("https://new.example")),
//!     ..Default::default()
//! };
//!
//! let report = run_verification(config, "/about, /company/about").await?;
//! println!("{} working, {} mismatch, {} manual check",
//!          report.summary.success, report.summary.mismatch, report.summary.error);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod mapping;
mod resolver;
mod verify;

// Re-export public API
pub use app::{
    evaluate_exit_code, is_stdin, print_summary, read_mappings, read_mappings_from, should_export,
    EXIT_FAILURE, EXIT_INTERRUPTED, EXIT_OK,
};
pub use config::{BaseDomains, Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, ConfigError, FetchError, FetchErrorKind, InitializationError,
    RunError,
};
pub use fetch::{resolve_redirect_chain, FetchOutcome, Fetcher, HttpFetcher};
pub use mapping::{parse_mappings, MappingRecord, MappingStatus};
pub use resolver::{is_absolute_url, resolve, UrlRole};
pub use verify::{
    check_record, classify, normalize_for_comparison, record_outcome, Progress, RecordCallback,
    ResolvedMapping, ResultStore, RunSummary, StoreSnapshot, VerificationEngine,
};

/// Results of a verification run.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    /// Per-status counts and elapsed time
    pub summary: RunSummary,
    /// Every record, in input order
    pub records: Vec<MappingRecord>,
}

/// Verifies the mappings in `input` with an HTTP fetcher built from `config`.
///
/// This is the one-call entry point; use [`VerificationEngine`] directly to
/// observe progress, change domains between runs, or reset mid-run.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP client cannot
/// be built. Unreachable URLs are not errors: they end up as `error` records.
pub async fn run_verification(config: Config, input: &str) -> anyhow::Result<VerificationReport> {
    use anyhow::Context;

    config.validate().context("Configuration validation failed")?;
    let fetcher = HttpFetcher::new(&config).context("Failed to initialize HTTP client")?;
    let engine = VerificationEngine::new(fetcher, &config);
    engine.set_input(input);

    let summary = engine.run().await?;
    Ok(VerificationReport {
        summary,
        records: engine.store().records(),
    })
}
