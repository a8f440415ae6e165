//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, pacing, record detail strings)
//! - The library `Config` and the base-domain pair
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use types::{BaseDomains, Config, LogFormat, LogLevel};
