//! Tolerant parsing of redirect mapping lists.
//!
//! Accepts CSV, tab-separated, column-aligned and arrow-annotated lines in one
//! grammar, so a list pasted from a spreadsheet or a migration plan works as-is.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::record::MappingRecord;

/// Comma, tab, a run of two or more whitespace characters, or `->`.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\t|\s{2,}|->").expect("separator pattern is valid"));

/// Parses raw multi-line text into pending mapping records.
///
/// Each record's `id` is the zero-based line index, so blank lines leave gaps
/// in the sequence. Lines with fewer than two non-empty tokens are dropped
/// silently; tokens after the second are ignored.
pub fn parse_mappings(input: &str) -> Vec<MappingRecord> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index, line))
        .collect()
}

fn parse_line(index: usize, line: &str) -> Option<MappingRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let mut tokens = SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|token| !token.is_empty());

    match (tokens.next(), tokens.next()) {
        (Some(original), Some(target)) => Some(MappingRecord::new(index, original, target)),
        _ => {
            debug!("Skipping line {} without two tokens: {:?}", index + 1, line);
            None
        }
    }
}
