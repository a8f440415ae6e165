//! Main application modules.
//!
//! This module provides what the binary needs around a run: reading the
//! mapping list, per-record and summary output, and the exit policy.

pub mod exit_code;
pub mod input;
pub mod logging;
pub mod statistics;

// Re-export public API
pub use exit_code::{evaluate_exit_code, should_export, EXIT_FAILURE, EXIT_INTERRUPTED, EXIT_OK};
pub use input::{is_stdin, read_mappings, read_mappings_from};
pub use logging::log_record;
pub use statistics::print_summary;
