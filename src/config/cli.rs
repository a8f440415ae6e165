//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{
    DEFAULT_PACING_DELAY_MS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS,
    TCP_CONNECT_TIMEOUT_SECS,
};
use crate::config::types::{BaseDomains, Config, LogFormat, LogLevel};
use crate::export::ExportFormat;

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Relative paths on both sides, one domain per site
/// redirect_verifier redirects.csv --source-domain https://old.example --target-domain https://new.example
///
/// # Read mappings from stdin, no pacing, JSON Lines output
/// cat redirects.tsv | redirect_verifier - --delay-ms 0 --format jsonl --output results.jsonl
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_verifier",
    about = "Checks that old URL -> new URL redirect mappings land where they should."
)]
pub struct Opt {
    /// File with one `OLD, NEW` mapping per line (`-` reads stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Base domain of the old site, used for relative source paths
    #[arg(long)]
    pub source_domain: Option<String>,

    /// Base domain of the new site, used for relative target paths
    #[arg(long)]
    pub target_domain: Option<String>,

    /// Delay between checks in milliseconds (0 disables pacing)
    #[arg(long, default_value_t = DEFAULT_PACING_DELAY_MS)]
    pub delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[arg(long, default_value_t = TCP_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum redirect hops followed per mapping
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Results file (defaults to `redirect_results_<date>.csv|jsonl`)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Results format: csv|jsonl
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Exit with status 1 when any mapping is not a success
    #[arg(long)]
    pub fail_on_mismatch: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config {
            domains: BaseDomains::new(opt.source_domain.as_deref(), opt.target_domain.as_deref()),
            pacing_delay_ms: opt.delay_ms,
            timeout_seconds: opt.timeout_seconds,
            connect_timeout_seconds: opt.connect_timeout_seconds,
            user_agent: opt.user_agent.clone(),
            max_redirects: opt.max_redirects,
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
