//! Run summary printing.

use log::{info, warn};

use crate::mapping::{MappingRecord, MappingStatus};
use crate::verify::RunSummary;

/// Logs the one-line summary of a run, followed by each mapping that needs
/// attention.
pub fn print_summary(summary: &RunSummary, records: &[MappingRecord]) {
    info!(
        "Checked {} mapping{} in {:.1}s: {} working, {} mismatch, {} manual check",
        summary.total,
        if summary.total == 1 { "" } else { "s" },
        summary.elapsed_seconds,
        summary.success,
        summary.mismatch,
        summary.error
    );

    for record in records
        .iter()
        .filter(|r| matches!(r.status, MappingStatus::Mismatch | MappingStatus::Error))
    {
        warn!(
            "  {:<12} {} (got: {})",
            record.status.label(),
            record.original_input,
            record.final_url
        );
    }
}
