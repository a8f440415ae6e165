//! CSV export functionality.
//!
//! One row per mapping, with the resolved URLs next to the raw inputs.

use std::io::Write;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use super::row::{ExportRow, CSV_HEADERS};
use crate::config::BaseDomains;
use crate::mapping::MappingRecord;

/// Writes `records` as CSV to `output`.
///
/// Fields containing a comma, a quote or a line break are quoted, with
/// embedded quotes doubled. Lines end with `\n`.
///
/// # Returns
///
/// The number of data rows written (the header is not counted).
pub fn export_csv<W: Write>(
    records: &[MappingRecord],
    domains: &BaseDomains,
    output: W,
) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;

    let mut record_count = 0;
    for record in records {
        let row = ExportRow::new(record, domains);
        writer
            .write_record(row.csv_fields())
            .with_context(|| format!("Failed to write CSV row for mapping {}", record.id))?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingStatus;

    fn export_to_string(records: &[MappingRecord], domains: &BaseDomains) -> String {
        let mut buf = Vec::new();
        export_csv(records, domains, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_row() {
        let out = export_to_string(&[], &BaseDomains::default());
        assert_eq!(
            out,
            "Status,Original Input,Full Source URL,Target Input,Expected Target URL,Actual Final URL,Details\n"
        );
    }

    #[test]
    fn test_row_contents() {
        let mut record = MappingRecord::new(0, "/a", "/b");
        record.status = MappingStatus::Error;
        record.details = "CORS/Network Error - Verify Manually".to_string();
        record.final_url = "---".to_string();
        let domains = BaseDomains::new(Some("https://old.com"), Some("https://new.com"));

        let out = export_to_string(&[record], &domains);
        let second_line = out.lines().nth(1).unwrap();
        assert_eq!(
            second_line,
            "error,/a,https://old.com/a,/b,https://new.com/b,---,CORS/Network Error - Verify Manually"
        );
    }

    #[test]
    fn test_fields_with_delimiter_quote_or_newline_are_quoted() {
        let mut record = MappingRecord::new(0, "/a?x=1,2", "/say \"hi\"");
        record.details = "line one\nline two".to_string();

        let out = export_to_string(&[record], &BaseDomains::default());

        assert!(out.contains("\"/a?x=1,2\""));
        assert!(out.contains("\"/say \"\"hi\"\"\""));
        assert!(out.contains("\"line one\nline two\""));
    }

    #[test]
    fn test_returns_row_count() {
        let records = crate::mapping::parse_mappings("/a, /b\n/c, /d");
        let mut buf = Vec::new();
        assert_eq!(
            export_csv(&records, &BaseDomains::default(), &mut buf).unwrap(),
            2
        );
    }
}
