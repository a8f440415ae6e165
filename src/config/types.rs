//! Configuration types.
//!
//! This module defines the library configuration and the enums shared with the
//! command-line front end.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_PACING_DELAY_MS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS,
    TCP_CONNECT_TIMEOUT_SECS,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Base domains that relative mapping tokens are resolved against.
///
/// Both are free-form and optional. An absolute token on either side of a
/// mapping always wins over the configured domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseDomains {
    /// Domain of the old site (left-hand side of a mapping)
    pub source: Option<String>,
    /// Domain of the new site (right-hand side of a mapping)
    pub target: Option<String>,
}

impl BaseDomains {
    /// Builds a domain pair, treating blank strings as "not configured".
    pub fn new(source: Option<&str>, target: Option<&str>) -> Self {
        Self {
            source: non_blank(source),
            target: non_blank(target),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use redirect_verifier::{BaseDomains, Config};
///
/// let config = Config {
///     domains: BaseDomains::new(Some("https://old.example"), Some("https://new.example")),
///     pacing_delay_ms: 0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Source/target base domains
    pub domains: BaseDomains,

    /// Delay between two checks in milliseconds (0 disables pacing)
    pub pacing_delay_ms: u64,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum number of redirect hops followed per check
    pub max_redirects: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Checks values that would make every single check fail.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_seconds",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_seconds",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "user_agent",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: BaseDomains::default(),
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: TCP_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
