//! Mapping records and their verification status.

use serde::Serialize;
use strum_macros::EnumIter;

use crate::error_handling::FetchErrorKind;

/// Verification status of one mapping.
///
/// `Pending` is the only non-terminal state. A run moves each record to
/// exactly one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    #[default]
    Pending,
    Success,
    Mismatch,
    Error,
}

impl MappingStatus {
    /// Machine-readable name, as written to exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingStatus::Pending => "pending",
            MappingStatus::Success => "success",
            MappingStatus::Mismatch => "mismatch",
            MappingStatus::Error => "error",
        }
    }

    /// Short label for display next to a record.
    pub fn label(&self) -> &'static str {
        match self {
            MappingStatus::Pending => "Pending",
            MappingStatus::Success => "Working",
            MappingStatus::Mismatch => "Mismatch",
            MappingStatus::Error => "Manual Check",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MappingStatus::Pending)
    }
}

impl std::fmt::Display for MappingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `old -> new` mapping and the outcome of checking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRecord {
    /// Zero-based line index in the raw input
    pub id: usize,
    /// Left-hand token exactly as given (path or absolute URL)
    pub original_input: String,
    /// Right-hand token exactly as given (path or absolute URL)
    pub target_input: String,
    pub status: MappingStatus,
    /// Human-readable outcome note, empty while pending
    pub details: String,
    /// URL the check landed on, or `---` when nothing could be observed
    pub final_url: String,
    /// Status code of the last response in the chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Every URL requested while following redirects, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirect_chain: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FetchErrorKind>,
}

impl MappingRecord {
    pub fn new(id: usize, original_input: impl Into<String>, target_input: impl Into<String>) -> Self {
        Self {
            id,
            original_input: original_input.into(),
            target_input: target_input.into(),
            status: MappingStatus::Pending,
            details: String::new(),
            final_url: String::new(),
            http_status: None,
            redirect_chain: Vec::new(),
            error_kind: None,
        }
    }

    /// Drops any previous outcome, leaving the inputs untouched.
    pub fn reset(&mut self) {
        *self = MappingRecord::new(
            self.id,
            std::mem::take(&mut self.original_input),
            std::mem::take(&mut self.target_input),
        );
    }
}
