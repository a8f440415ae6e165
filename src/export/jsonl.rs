//! JSONL export functionality.
//!
//! One JSON object per line, carrying everything the CSV has plus the HTTP
//! status, the redirect chain and the error kind.

use std::io::Write;

use anyhow::{Context, Result};

use super::row::ExportRow;
use crate::config::BaseDomains;
use crate::mapping::MappingRecord;

/// Writes `records` as JSON Lines to `output`.
///
/// # Returns
///
/// The number of lines written.
pub fn export_jsonl<W: Write>(
    records: &[MappingRecord],
    domains: &BaseDomains,
    mut output: W,
) -> Result<usize> {
    let mut record_count = 0;
    for record in records {
        let row = ExportRow::new(record, domains);
        serde_json::to_writer(&mut output, &row)
            .with_context(|| format!("Failed to serialize mapping {}", record.id))?;
        output.write_all(b"\n")?;
        record_count += 1;
    }
    output.flush().context("Failed to flush JSONL output")?;
    Ok(record_count)
}
