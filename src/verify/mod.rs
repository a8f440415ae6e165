//! Verification engine.
//!
//! This module provides:
//! - Per-record checking (resolve both sides, fetch, classify)
//! - The result store observed by display and export
//! - The sequential run loop with pacing, progress and cancellation

mod check;
mod classify;
mod engine;
mod store;

pub use check::{check_record, record_outcome, ResolvedMapping};
pub use classify::{classify, normalize_for_comparison};
pub use engine::{RecordCallback, RunSummary, VerificationEngine};
pub use store::{Progress, ResultStore, StoreSnapshot};
