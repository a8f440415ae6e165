//! Progress logging utilities.

use log::{info, warn};

use crate::mapping::{MappingRecord, MappingStatus};
use crate::verify::Progress;

/// Logs one finished record.
///
/// Successes go to `info`; mismatches and manual checks go to `warn` so they
/// stand out with `--log-level warn`.
pub fn log_record(record: &MappingRecord, progress: Progress) {
    match record.status {
        MappingStatus::Success | MappingStatus::Pending => info!(
            "[{}/{}] {} {} -> {}",
            progress.current,
            progress.total,
            record.status.label(),
            record.original_input,
            record.final_url
        ),
        MappingStatus::Mismatch => warn!(
            "[{}/{}] {} {} -> {} (expected {})",
            progress.current,
            progress.total,
            record.status.label(),
            record.original_input,
            record.final_url,
            record.target_input
        ),
        MappingStatus::Error => warn!(
            "[{}/{}] {} {}: {}",
            progress.current,
            progress.total,
            record.status.label(),
            record.original_input,
            record
                .error_kind
                .map(|kind| kind.as_str())
                .unwrap_or(record.details.as_str())
        ),
    }
}
