//! Export types and options.

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::config::EXPORT_FILE_PREFIX;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per mapping, for Excel/Sheets)
    Csv,
    /// JSONL format (one object per mapping, includes the redirect chain)
    Jsonl,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

/// Default results filename for an export made on `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use redirect_verifier::export::{default_export_filename, ExportFormat};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(
///     default_export_filename(ExportFormat::Csv, date),
///     "redirect_results_2024-03-09.csv"
/// );
/// ```
pub fn default_export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_FILE_PREFIX,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
