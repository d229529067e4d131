//! Structural checks on an assembled entry.
//!
//! Failing a check marks the entry invalid and records why; the entry itself
//! is still returned with every extracted field untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::DocketEntry;

static CASE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CD\d{4}-\d{6}$").unwrap());
static TOWNSHIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}[NS]$").unwrap());
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}[EW]$").unwrap());

/// Every rule `entry` breaks, in rule order.
pub fn validation_errors(entry: &DocketEntry) -> Vec<String> {
    let mut errors = Vec::new();

    if !CASE_NUMBER_RE.is_match(&entry.case_number) {
        errors.push(format!(
            "case number {:?} does not match CD####-######",
            entry.case_number
        ));
    }

    if let Some(section) = entry.legal.section
        && !(1..=36).contains(&section)
    {
        errors.push(format!("section {section} is outside 1-36"));
    }

    if let Some(township) = entry.legal.township {
        let township = township.to_string();
        if !TOWNSHIP_RE.is_match(&township) {
            errors.push(format!("township {township:?} does not match {{1-2 digits}}{{N|S}}"));
        }
    }

    if let Some(range) = entry.legal.range {
        let range = range.to_string();
        if !RANGE_RE.is_match(&range) {
            errors.push(format!("range {range:?} does not match {{1-2 digits}}{{E|W}}"));
        }
    }

    errors
}

/// Annotate `entry` with its validity and error list.
pub fn validate_entry(mut entry: DocketEntry) -> DocketEntry {
    entry.validation_errors = validation_errors(&entry);
    entry.valid = entry.validation_errors.is_empty();
    entry
}
