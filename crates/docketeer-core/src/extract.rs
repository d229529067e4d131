//! Per-field extraction from one case block.
//!
//! Every extractor looks at the whole block on its own; none depends on
//! another having succeeded. Missing fields come back as `None`.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::classify::{MONTH_NAMES, month_number};
use crate::error::ExtractError;

/// Field labels recognised inside a case block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Judge,
    Parties,
    Legal,
    Attorney,
    ReliefType,
    ReliefSought,
    Result,
}

impl Label {
    fn from_matched(text: &str) -> Option<Self> {
        let key: String = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        match key.as_str() {
            "judge" => Some(Self::Judge),
            "parties" => Some(Self::Parties),
            "legal" => Some(Self::Legal),
            "attorney" => Some(Self::Attorney),
            "relief type" => Some(Self::ReliefType),
            "relief sought" => Some(Self::ReliefSought),
            "result" => Some(Self::Result),
            _ => None,
        }
    }
}

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(judge|parties|legal|attorney|relief\s+type|relief\s+sought|result)[ \t]*:")
        .unwrap()
});

/// Where a multi-line span stops: any label, or a line opening with a weekday
/// (the hearing date line).
static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)\b(?:judge|parties|legal|attorney|relief\s+type|relief\s+sought|result)[ \t]*:|^[ \t]*(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
    .unwrap()
});

/// Weekday, month name, day, year and an optional 12-hour time. Only full
/// month names match, so other words after a weekday are not a hearing line.
static HEARING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)[ \t]*,?[ \t]+({})[ \t]+(\d{{1,2}})[ \t]*,?[ \t]+(\d{{4}})(?:[ \t]*,?[ \t]*(?:at[ \t]+)?(\d{{1,2}}):(\d{{2}})[ \t]*([ap])\.?[ \t]*m\b\.?)?",
        MONTH_NAMES.join("|")
    ))
    .unwrap()
});

static APPLICANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bapplicants?\b").unwrap());

/// Hearing date with its optional start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hearing {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

/// Raw field values pulled from one case block, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFields {
    pub judge: Option<String>,
    pub attorney: Option<String>,
    pub applicant: Option<String>,
    pub legal: Option<String>,
    pub hearing: Option<Hearing>,
    pub relief_type: Option<String>,
    pub relief_sought: Option<String>,
    pub result: Option<String>,
}

impl CaseFields {
    /// Run every extractor over `block`.
    pub fn extract(block: &str) -> Result<Self, ExtractError> {
        let (relief_type, relief_sought) = extract_relief(block);
        Ok(Self {
            judge: extract_judge(block),
            attorney: extract_attorney(block),
            applicant: extract_applicant(block),
            legal: extract_legal(block),
            hearing: extract_hearing(block)?,
            relief_type,
            relief_sought,
            result: extract_result(block),
        })
    }
}

pub fn extract_judge(block: &str) -> Option<String> {
    line_value(block, Label::Judge)
}

pub fn extract_attorney(block: &str) -> Option<String> {
    line_value(block, Label::Attorney)
}

/// Remainder of the `Legal:` line, for [`crate::legal::parse_legal_description`].
pub fn extract_legal(block: &str) -> Option<String> {
    line_value(block, Label::Legal)
}

pub fn extract_result(block: &str) -> Option<String> {
    line_value(block, Label::Result)
}

/// `Relief Type:` and `Relief Sought:` spans.
pub fn extract_relief(block: &str) -> (Option<String>, Option<String>) {
    (
        span_value(block, Label::ReliefType).map(collapse_whitespace),
        span_value(block, Label::ReliefSought).map(collapse_whitespace),
    )
}

/// Applicant named in the `Parties:` span.
///
/// The party described as "Applicant" wins. Otherwise the first `|`-separated
/// entry is taken, or the whole span when there is no separator.
pub fn extract_applicant(block: &str) -> Option<String> {
    let parties = span_value(block, Label::Parties)?;

    for line in parties.lines().filter(|l| APPLICANT_RE.is_match(l)) {
        let name = if line.contains('|') {
            line.split('|')
                .map(str::trim)
                .find(|seg| !seg.is_empty() && !APPLICANT_RE.is_match(seg))
                .map(str::to_string)
        } else {
            Some(APPLICANT_RE.replace_all(line, "").into_owned())
        };
        if let Some(name) = name.map(|n| clean_party(&n))
            && !name.is_empty()
        {
            return Some(name);
        }
    }

    let fallback = match parties.split_once('|') {
        Some((first, _)) => first,
        None => parties,
    };
    let name = collapse_whitespace(fallback);
    (!name.is_empty()).then_some(name)
}

/// First weekday-anchored hearing date in the block.
///
/// A match that names an impossible date or clock time is an error, so the
/// caller can drop the block.
pub fn extract_hearing(block: &str) -> Result<Option<Hearing>, ExtractError> {
    let Some(caps) = HEARING_RE.captures(block) else {
        return Ok(None);
    };
    let matched = caps.get(0).map(|m| m.as_str().trim()).unwrap_or_default();
    let bad_date = || ExtractError::InvalidHearingDate(matched.to_string());

    let month = month_number(&caps[1]).ok_or_else(bad_date)?;
    let day: u32 = caps[2].parse().map_err(|_| bad_date())?;
    let year: i32 = caps[3].parse().map_err(|_| bad_date())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad_date)?;

    let time = match (caps.get(4), caps.get(5), caps.get(6)) {
        (Some(h), Some(m), Some(meridiem)) => Some(
            clock_time(h.as_str(), m.as_str(), meridiem.as_str())
                .ok_or_else(|| ExtractError::InvalidHearingTime(matched.to_string()))?,
        ),
        _ => None,
    };

    Ok(Some(Hearing { date, time }))
}

/// 12-hour clock → `NaiveTime`.
fn clock_time(hour: &str, minute: &str, meridiem: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok().filter(|h| (1..=12).contains(h))?;
    let minute: u32 = minute.parse().ok()?;
    let pm = meridiem.eq_ignore_ascii_case("p");
    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0)
}

// ── Label scanning ──

/// Byte offsets just past every occurrence of `label:`.
fn label_ends(block: &str, label: Label) -> impl Iterator<Item = usize> + '_ {
    LABEL_RE
        .captures_iter(block)
        .filter(move |caps| Label::from_matched(&caps[1]) == Some(label))
        .filter_map(|caps| caps.get(0).map(|m| m.end()))
}

/// First non-empty value on a `label:` line, cut at any later label on the
/// same line.
fn line_value(block: &str, label: Label) -> Option<String> {
    label_ends(block, label).find_map(|start| {
        let rest = &block[start..];
        let line = rest.split('\n').next().unwrap_or_default();
        let value = match LABEL_RE.find(line) {
            Some(next) => &line[..next.start()],
            None => line,
        };
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Text after the first `label:` up to the next boundary or end of block.
fn span_value(block: &str, label: Label) -> Option<&str> {
    let start = label_ends(block, label).next()?;
    let end = BOUNDARY_RE
        .find_at(block, start)
        .map(|m| m.start())
        .unwrap_or(block.len());
    let value = block[start..end].trim();
    (!value.is_empty()).then_some(value)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim separators and brackets left around a party name.
fn clean_party(s: &str) -> String {
    let s = s.replace("()", "").replace("[]", "");
    collapse_whitespace(
        s.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | '-' | '|' | '(' | ')')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "\
Judge: Hon. Jane Doe
Parties: ACME ENERGY LLC | Applicant
JOHN SMITH | Respondent
Legal: S5 T13N R23W Roger Mills
Attorney: Robert Lawyer
Monday, March 2, 2026 8:30 AM
Relief Type: Pooling Relief Sought: Pooling of the Woodford
and Mississippian common sources of supply
Result: C - 03/15/2026
";

    #[test]
    fn extracts_every_field() {
        let fields = CaseFields::extract(BLOCK).unwrap();
        assert_eq!(fields.judge.as_deref(), Some("Hon. Jane Doe"));
        assert_eq!(fields.attorney.as_deref(), Some("Robert Lawyer"));
        assert_eq!(fields.applicant.as_deref(), Some("ACME ENERGY LLC"));
        assert_eq!(fields.legal.as_deref(), Some("S5 T13N R23W Roger Mills"));
        assert_eq!(fields.relief_type.as_deref(), Some("Pooling"));
        assert_eq!(
            fields.relief_sought.as_deref(),
            Some("Pooling of the Woodford and Mississippian common sources of supply")
        );
        assert_eq!(fields.result.as_deref(), Some("C - 03/15/2026"));

        let hearing = fields.hearing.unwrap();
        assert_eq!(hearing.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(hearing.time, NaiveTime::from_hms_opt(8, 30, 0));
    }

    #[test]
    fn empty_block_has_no_fields() {
        let fields = CaseFields::extract("").unwrap();
        assert_eq!(fields, CaseFields::default());
    }

    #[test]
    fn label_names_resolve() {
        assert_eq!(Label::from_matched("Relief   Type"), Some(Label::ReliefType));
        assert_eq!(Label::from_matched("RESULT"), Some(Label::Result));
        assert_eq!(Label::from_matched("Docket"), None);
    }

    #[test]
    fn judge_absent_without_label() {
        assert_eq!(extract_judge("Attorney: Someone\n"), None);
    }

    #[test]
    fn empty_label_falls_through_to_next_line() {
        let block = "Judge:\nJudge: Second Judge\n";
        assert_eq!(extract_judge(block).as_deref(), Some("Second Judge"));
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(extract_attorney("ATTORNEY:  Pat Counsel  \n").as_deref(), Some("Pat Counsel"));
    }

    #[test]
    fn line_value_stops_at_next_label_on_same_line() {
        let block = "Judge: A. Referee    Attorney: B. Counsel\n";
        assert_eq!(extract_judge(block).as_deref(), Some("A. Referee"));
        assert_eq!(extract_attorney(block).as_deref(), Some("B. Counsel"));
    }

    #[test]
    fn applicant_prefers_applicant_party() {
        let block = "Parties: JOHN SMITH | Respondent\nBIG OIL CO | Applicant\nLegal: S1 T1N R1W Grady\n";
        assert_eq!(extract_applicant(block).as_deref(), Some("BIG OIL CO"));
    }

    #[test]
    fn applicant_marker_without_separator() {
        let block = "Parties:\n  RIVER ROCK OPERATING, LLC (Applicant)\n  Jane Roe (Respondent)\n";
        assert_eq!(extract_applicant(block).as_deref(), Some("RIVER ROCK OPERATING, LLC"));
    }

    #[test]
    fn applicant_falls_back_to_first_entry() {
        let block = "Parties: ALPHA LLC | BETA LLC\nResult: DIS\n";
        assert_eq!(extract_applicant(block).as_deref(), Some("ALPHA LLC"));
    }

    #[test]
    fn applicant_falls_back_to_whole_span() {
        let block = "Parties: ALPHA\n  EXPLORATION LLC\nRelief Type: Spacing\n";
        assert_eq!(extract_applicant(block).as_deref(), Some("ALPHA EXPLORATION LLC"));
    }

    #[test]
    fn applicant_absent_without_parties() {
        assert_eq!(extract_applicant("Judge: X\n"), None);
        assert_eq!(extract_applicant("Parties:\nJudge: X\n"), None);
    }

    #[test]
    fn relief_span_stops_at_hearing_line() {
        let block = "Relief Type: Increased Density\nTuesday, April 14, 2026 9:00 AM\n";
        let (relief_type, relief_sought) = extract_relief(block);
        assert_eq!(relief_type.as_deref(), Some("Increased Density"));
        assert_eq!(relief_sought, None);
    }

    #[test]
    fn relief_absent_without_label() {
        assert_eq!(extract_relief("Result: DIS\n"), (None, None));
    }

    #[test]
    fn hearing_without_time() {
        let hearing = extract_hearing("Wednesday, January 7, 2026\n").unwrap().unwrap();
        assert_eq!(hearing.date, NaiveDate::from_ymd_opt(2026, 1, 7).unwrap());
        assert_eq!(hearing.time, None);
    }

    #[test]
    fn hearing_pm_and_noon_midnight() {
        let pm = extract_hearing("Friday, May 1, 2026 1:30 PM").unwrap().unwrap();
        assert_eq!(pm.time, NaiveTime::from_hms_opt(13, 30, 0));
        let noon = extract_hearing("friday, may 1, 2026 12:00 p.m.").unwrap().unwrap();
        assert_eq!(noon.time, NaiveTime::from_hms_opt(12, 0, 0));
        let midnight = extract_hearing("Friday May 1 2026 12:15 AM").unwrap().unwrap();
        assert_eq!(midnight.time, NaiveTime::from_hms_opt(0, 15, 0));
    }

    #[test]
    fn hearing_absent_without_weekday() {
        assert_eq!(extract_hearing("March 2, 2026 8:30 AM").unwrap(), None);
    }

    #[test]
    fn impossible_hearing_date_is_error() {
        let err = extract_hearing("Monday, February 30, 2026 8:30 AM").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidHearingDate(_)), "got {err:?}");
    }

    #[test]
    fn non_month_after_weekday_is_no_hearing() {
        assert_eq!(extract_hearing("Monday, Smarch 3, 2026").unwrap(), None);
        assert_eq!(extract_hearing("Monday, Sept 14, 2026 9:00 AM").unwrap(), None);
        assert_eq!(extract_hearing("Monday, Sept. 14, 2026 9:00 AM").unwrap(), None);
    }

    #[test]
    fn prose_weekday_does_not_hide_hearing_line() {
        let block = "Relief Sought: wells completed Monday through 3 2026\nTuesday, March 3, 2026 9:00 AM\n";
        let hearing = extract_hearing(block).unwrap().unwrap();
        assert_eq!(hearing.date, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
        assert_eq!(hearing.time, NaiveTime::from_hms_opt(9, 0, 0));
    }

    #[test]
    fn impossible_hearing_time_is_error() {
        let err = extract_hearing("Monday, March 2, 2026 13:30 PM").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidHearingTime(_)), "got {err:?}");
        let err = extract_hearing("Monday, March 2, 2026 8:75 AM").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidHearingTime(_)), "got {err:?}");
    }
}
