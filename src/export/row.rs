//! Export row building.
//!
//! Turns a record into the flat row shared by every export format. Resolved
//! URLs are computed here, with the domains current at export time.

use serde::Serialize;

use crate::config::BaseDomains;
use crate::error_handling::FetchErrorKind;
use crate::mapping::{MappingRecord, MappingStatus};
use crate::verify::ResolvedMapping;

/// CSV header, in column order.
pub const CSV_HEADERS: [&str; 7] = [
    "Status",
    "Original Input",
    "Full Source URL",
    "Target Input",
    "Expected Target URL",
    "Actual Final URL",
    "Details",
];

/// One exported mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    pub id: usize,
    pub status: MappingStatus,
    pub original_input: &'a str,
    pub source_url: String,
    pub target_input: &'a str,
    pub expected_url: String,
    pub final_url: &'a str,
    pub details: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "is_empty_chain")]
    pub redirect_chain: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FetchErrorKind>,
}

fn is_empty_chain(chain: &&[String]) -> bool {
    chain.is_empty()
}

impl<'a> ExportRow<'a> {
    pub fn new(record: &'a MappingRecord, domains: &BaseDomains) -> Self {
        let resolved = ResolvedMapping::from_record(record, domains);
        Self {
            id: record.id,
            status: record.status,
            original_input: &record.original_input,
            source_url: resolved.source_url,
            target_input: &record.target_input,
            expected_url: resolved.expected_url,
            final_url: &record.final_url,
            details: &record.details,
            http_status: record.http_status,
            redirect_chain: &record.redirect_chain,
            error_kind: record.error_kind,
        }
    }

    /// Fields in `CSV_HEADERS` order.
    pub fn csv_fields(&self) -> [&str; 7] {
        [
            self.status.as_str(),
            self.original_input,
            &self.source_url,
            self.target_input,
            &self.expected_url,
            self.final_url,
            self.details,
        ]
    }
}
