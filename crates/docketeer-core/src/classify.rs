//! Relief categorisation, disposition classification and continuation dates.
//!
//! Both classifiers walk an ordered rule table and stop at the first hit, so
//! table order decides ties: relief text mentioning "INCREASED DENSITY" and
//! "SPACING" is `IncreasedDensity` because that rule comes first.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ExtractError;
use crate::types::{DispositionStatus, ReliefCategory};

/// Month names in calendar order; position + 1 is the month number.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a month name (any case) to 1–12.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

// ── Relief categories ──

/// Keyword test against uppercased relief text.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// At least one keyword present.
    Any(&'static [&'static str]),
    /// Every keyword present, in any order.
    All(&'static [&'static str]),
}

impl Keywords {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Any(words) => words.iter().any(|w| text.contains(w)),
            Self::All(words) => words.iter().all(|w| text.contains(w)),
        }
    }
}

/// Ordered relief rules. First match wins.
pub const RELIEF_RULES: &[(Keywords, ReliefCategory)] = &[
    (
        Keywords::All(&["INCREASED", "DENSITY"]),
        ReliefCategory::IncreasedDensity,
    ),
    (Keywords::Any(&["POOLING"]), ReliefCategory::Pooling),
    (Keywords::Any(&["SPACING"]), ReliefCategory::Spacing),
    (
        Keywords::Any(&["LOCATION EXCEPTION", "EXCEPTION TO THE LOCATION", "EXCEPTION TO LOCATION"]),
        ReliefCategory::LocationException,
    ),
    (
        Keywords::Any(&["HORIZONTAL", "MULTIUNIT", "MULTI-UNIT"]),
        ReliefCategory::HorizontalWell,
    ),
    (
        Keywords::Any(&[
            "CHANGE OF OPERATOR",
            "CHANGE OPERATOR",
            "OPERATOR CHANGE",
            "SUCCESSOR OPERATOR",
        ]),
        ReliefCategory::OperatorChange,
    ),
    (Keywords::Any(&["TRANSFER"]), ReliefCategory::WellTransfer),
    (
        Keywords::Any(&["MODIFY", "MODIFICATION", "AMEND", "VACATE", "CLARIFY", "EXTEND", "EXTENSION"]),
        ReliefCategory::OrderModification,
    ),
    (
        Keywords::Any(&["CONTEMPT", "ENFORCEMENT", "PLUGGING", "VIOLATION", "SHOW CAUSE", "POLLUTION"]),
        ReliefCategory::Enforcement,
    ),
];

/// Categorise a case from its raw relief-type and relief-sought text.
///
/// Without relief-type text the category is always `Other`.
pub fn categorize_relief(relief_type: Option<&str>, relief_sought: Option<&str>) -> ReliefCategory {
    let Some(relief_type) = relief_type else {
        return ReliefCategory::Other;
    };
    let text = format!("{} {}", relief_type, relief_sought.unwrap_or_default()).to_uppercase();

    RELIEF_RULES
        .iter()
        .find(|(keywords, _)| keywords.matches(&text))
        .map(|(_, category)| *category)
        .unwrap_or(ReliefCategory::Other)
}

// ── Disposition status ──

/// Ordered disposition patterns over uppercased result text. Short codes
/// come before the spelled-out keywords.
const DISPOSITION_PATTERNS: &[(&str, DispositionStatus)] = &[
    (r"^C\s*-", DispositionStatus::Continued),
    (r"\b(?:DIS|DISMISSED|DMOA)\b", DispositionStatus::Dismissed),
    (r"\bMOR\b", DispositionStatus::Recommended),
    (r"\bRO\b", DispositionStatus::Heard),
    (r"\bMOW\b", DispositionStatus::Withdrawn),
    (r"\bTUA\b", DispositionStatus::UnderAdvisement),
    (r"\bCONT(?:INUED|\.)?\b", DispositionStatus::Continued),
    (r"\bWITHDRAWN\b", DispositionStatus::Withdrawn),
    (r"\bUNDER\s+ADVISEMENT\b", DispositionStatus::UnderAdvisement),
    (r"\bRECOMMENDED\b", DispositionStatus::Recommended),
    (r"\b(?:APPROVED|GRANTED)\b", DispositionStatus::Approved),
    (r"\bDENIED\b", DispositionStatus::Denied),
    (r"\bHEARD\b", DispositionStatus::Heard),
];

static DISPOSITION_RULES: LazyLock<Vec<(Regex, DispositionStatus)>> = LazyLock::new(|| {
    DISPOSITION_PATTERNS
        .iter()
        .map(|(pattern, status)| (Regex::new(pattern).unwrap(), *status))
        .collect()
});

static CONTINUATION_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());

/// Classify the raw `Result:` text.
///
/// `Unknown` when there is no result text, `Scheduled` when there is text
/// but no rule recognises it.
pub fn classify_disposition(result: Option<&str>) -> DispositionStatus {
    let text = match result.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_uppercase(),
        _ => return DispositionStatus::Unknown,
    };

    DISPOSITION_RULES
        .iter()
        .find(|(re, _)| re.is_match(&text))
        .map(|(_, status)| *status)
        .unwrap_or(DispositionStatus::Scheduled)
}

/// First `MM/DD/YYYY` date in the result text.
///
/// Reported whatever the disposition is; callers decide whether a date on a
/// non-continued case matters.
pub fn extract_continuation_date(result: Option<&str>) -> Result<Option<NaiveDate>, ExtractError> {
    let Some(caps) = result.and_then(|r| CONTINUATION_DATE_RE.captures(r)) else {
        return Ok(None);
    };
    let invalid = || ExtractError::InvalidContinuationDate(caps[0].to_string());

    let month: u32 = caps[1].parse().map_err(|_| invalid())?;
    let day: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(invalid)
}
