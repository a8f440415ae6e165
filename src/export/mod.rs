//! Export functionality for verification results.
//!
//! This module writes the records of a result store to CSV or JSONL. Exports
//! only read the records, so they can run against a snapshot taken mid-run.

mod csv;
mod jsonl;
mod row;
mod types;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

pub use self::csv::export_csv;
pub use jsonl::export_jsonl;
pub use row::{ExportRow, CSV_HEADERS};
pub use types::{default_export_filename, ExportFormat};

use crate::config::BaseDomains;
use crate::mapping::MappingRecord;

/// Writes `records` to `path` in the given format.
///
/// # Returns
///
/// The number of records exported.
pub fn write_export_file(
    path: &Path,
    format: ExportFormat,
    records: &[MappingRecord],
    domains: &BaseDomains,
) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => export_csv(records, domains, writer),
        ExportFormat::Jsonl => export_jsonl(records, domains, writer),
    }
}
