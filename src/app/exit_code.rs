//! Process exit policy for the binary.

use crate::error_handling::RunError;
use crate::verify::RunSummary;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// 128 + SIGINT, what a shell reports for a Ctrl-C'd process.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Maps the outcome of a run to the process exit code.
///
/// - a finished run exits 0, unless `fail_on_mismatch` is set and some record
///   is not a success (then 1)
/// - a run stopped by a reset exits 130
/// - any other batch failure exits 1
pub fn evaluate_exit_code(result: &Result<RunSummary, RunError>, fail_on_mismatch: bool) -> i32 {
    match result {
        Ok(summary) if fail_on_mismatch && !summary.all_successful() => EXIT_FAILURE,
        Ok(_) => EXIT_OK,
        Err(RunError::Cancelled { .. }) => EXIT_INTERRUPTED,
        Err(RunError::AlreadyRunning) => EXIT_FAILURE,
    }
}

/// A results file is only written when at least one mapping was checked.
pub fn should_export(summary: &RunSummary) -> bool {
    summary.total > 0
}
