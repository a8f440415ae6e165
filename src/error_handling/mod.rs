//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, configuration and runs
//! - The fetch error taxonomy stored on `error` records
//! - Categorization of HTTP client errors into that taxonomy
//!
//! Failures are split into two layers:
//! - **Record-level**: a fetch that could not observe a final URL. Caught by the
//!   engine and turned into the record's `error` status, never propagated.
//! - **Batch-level**: a concurrent run or a reset during a run (`RunError`).

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ConfigError, FetchError, FetchErrorKind, InitializationError, RunError};
