//! Checking a single mapping.

use log::debug;

use super::classify::classify;
use crate::config::{BaseDomains, DETAILS_ERROR, UNREACHABLE_SENTINEL};
use crate::error_handling::FetchError;
use crate::fetch::{FetchOutcome, Fetcher};
use crate::mapping::{MappingRecord, MappingStatus};
use crate::resolver::{resolve, UrlRole};

/// Both sides of a mapping resolved against the base domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMapping {
    pub source_url: String,
    pub expected_url: String,
}

impl ResolvedMapping {
    pub fn from_record(record: &MappingRecord, domains: &BaseDomains) -> Self {
        Self {
            source_url: resolve(&record.original_input, UrlRole::Source, domains),
            expected_url: resolve(&record.target_input, UrlRole::Target, domains),
        }
    }
}

/// Writes the result of a fetch into `record`.
///
/// A fetch failure is never propagated: it becomes an `error` status with the
/// unreachable sentinel as final URL.
pub fn record_outcome(
    record: &mut MappingRecord,
    expected_url: &str,
    result: Result<FetchOutcome, FetchError>,
) {
    match result {
        Ok(outcome) => {
            let (status, details) = classify(&outcome.final_url, expected_url);
            record.status = status;
            record.details = details.to_string();
            record.final_url = outcome.final_url;
            record.http_status = outcome.status;
            record.redirect_chain = outcome.chain;
            record.error_kind = None;
        }
        Err(error) => {
            debug!("Fetch failed for record {}: {}", record.id, error);
            record.status = MappingStatus::Error;
            record.details = DETAILS_ERROR.to_string();
            record.final_url = UNREACHABLE_SENTINEL.to_string();
            record.http_status = None;
            record.redirect_chain = Vec::new();
            record.error_kind = Some(error.kind);
        }
    }
}

/// Resolves, fetches and classifies one record.
pub async fn check_record<F: Fetcher>(
    fetcher: &F,
    record: &mut MappingRecord,
    domains: &BaseDomains,
) {
    let resolved = ResolvedMapping::from_record(record, domains);
    let result = fetcher.fetch(&resolved.source_url).await;
    record_outcome(record, &resolved.expected_url, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FetchErrorKind;

    fn domains() -> BaseDomains {
        BaseDomains::new(Some("https://old.com"), Some("https://new.com"))
    }

    #[test]
    fn test_resolved_mapping_uses_roles() {
        let record = MappingRecord::new(0, "/a", "/b");
        assert_eq!(
            ResolvedMapping::from_record(&record, &domains()),
            ResolvedMapping {
                source_url: "https://old.com/a".to_string(),
                expected_url: "https://new.com/b".to_string(),
            }
        );
    }

    #[test]
    fn test_successful_outcome_keeps_chain_and_status() {
        let mut record = MappingRecord::new(0, "/a", "/b");
        let outcome = FetchOutcome {
            final_url: "https://new.com/b".to_string(),
            status: Some(200),
            chain: vec![
                "https://old.com/a".to_string(),
                "https://new.com/b".to_string(),
            ],
        };

        record_outcome(&mut record, "https://new.com/b", Ok(outcome));

        assert_eq!(record.status, MappingStatus::Success);
        assert_eq!(record.details, "Redirected correctly");
        assert_eq!(record.final_url, "https://new.com/b");
        assert_eq!(record.http_status, Some(200));
        assert_eq!(record.redirect_chain.len(), 2);
    }

    #[test]
    fn test_mismatch_outcome_records_landed_url() {
        let mut record = MappingRecord::new(0, "/a", "/b");
        record_outcome(
            &mut record,
            "https://new.com/b",
            Ok(FetchOutcome::landed("https://new.com/other")),
        );
        assert_eq!(record.status, MappingStatus::Mismatch);
        assert_eq!(record.details, "Landed on unexpected URL");
        assert_eq!(record.final_url, "https://new.com/other");
    }

    #[test]
    fn test_failed_fetch_becomes_error_record() {
        let mut record = MappingRecord::new(0, "/a", "/b");
        record_outcome(
            &mut record,
            "https://new.com/b",
            Err(FetchError::new(FetchErrorKind::Timeout, "timed out")),
        );
        assert_eq!(record.status, MappingStatus::Error);
        assert_eq!(record.details, "CORS/Network Error - Verify Manually");
        assert_eq!(record.final_url, "---");
        assert_eq!(record.error_kind, Some(FetchErrorKind::Timeout));
    }
}
