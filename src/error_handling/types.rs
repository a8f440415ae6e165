//! Error type definitions.
//!
//! This module defines the errors raised while setting up, fetching, and
//! running a verification batch.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration was rejected before any resource was built.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Invalid configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Batch-level failures of a verification run.
///
/// Per-record failures never show up here: they are folded into the record's
/// status instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RunError {
    /// Another run is already working on the same result store.
    #[error("a verification run is already in progress")]
    AlreadyRunning,

    /// The run was reset before every record was checked.
    #[error("verification run cancelled after {checked} of {total} records")]
    Cancelled { checked: usize, total: usize },
}

/// Why a fetch could not observe a final URL.
///
/// A browser sees all of these (plus cross-origin blocks) as one opaque
/// network error. Fetching from a process we control lets us tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// The resolved source is not an absolute http(s) URL, or a `Location`
    /// header could not be turned into one.
    InvalidUrl,
    /// The request (or one hop of it) timed out.
    Timeout,
    /// DNS resolution or the TCP/TLS connection failed.
    Connect,
    /// The redirect chain was longer than the configured hop limit.
    TooManyRedirects,
    /// The request failed while being sent or while reading the response head.
    Request,
    /// Anything else reported by the HTTP stack.
    Other,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "Invalid URL",
            FetchErrorKind::Timeout => "Timeout",
            FetchErrorKind::Connect => "Connection error",
            FetchErrorKind::TooManyRedirects => "Too many redirects",
            FetchErrorKind::Request => "Request error",
            FetchErrorKind::Other => "Other network error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed fetch: its category plus the underlying message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ReqwestError> for FetchError {
    fn from(error: ReqwestError) -> Self {
        let kind = super::categorization::categorize_reqwest_error(&error);
        FetchError::new(kind, error.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(error: url::ParseError) -> Self {
        FetchError::new(FetchErrorKind::InvalidUrl, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_fetch_error_kinds_have_string_representation() {
        for kind in FetchErrorKind::iter() {
            assert!(!kind.as_str().is_empty(), "{:?} should have a label", kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_fetch_error_display_includes_kind_and_message() {
        let err = FetchError::new(FetchErrorKind::Timeout, "operation timed out");
        assert_eq!(err.to_string(), "Timeout: operation timed out");
    }

    #[test]
    fn test_url_parse_error_is_invalid_url() {
        let parse_err = url::Url::parse("/relative/only").unwrap_err();
        let err = FetchError::from(parse_err);
        assert_eq!(err.kind, FetchErrorKind::InvalidUrl);
    }

    #[test]
    fn test_fetch_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FetchErrorKind::TooManyRedirects).unwrap();
        assert_eq!(json, "\"too_many_redirects\"");
    }

    #[test]
    fn test_run_error_messages() {
        assert_eq!(
            RunError::AlreadyRunning.to_string(),
            "a verification run is already in progress"
        );
        assert_eq!(
            RunError::Cancelled {
                checked: 2,
                total: 5
            }
            .to_string(),
            "verification run cancelled after 2 of 5 records"
        );
    }

    #[test]
    fn test_config_error_converts_to_initialization_error() {
        let err: InitializationError = ConfigError::InvalidValue {
            field: "timeout_seconds",
            reason: "must be greater than 0".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
