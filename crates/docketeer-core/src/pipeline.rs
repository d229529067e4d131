//! Docket parsing pipeline: segment → extract → classify → assemble → validate.
//!
//! A block that fails extraction is recorded as a [`BlockFailure`] and the
//! rest of the document carries on. Parsing is a pure function of the input
//! text.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classify::{categorize_relief, classify_disposition, extract_continuation_date};
use crate::error::ExtractError;
use crate::extract::CaseFields;
use crate::legal::parse_legal_description;
use crate::segment::{CaseBlock, segment_blocks};
use crate::types::DocketEntry;
use crate::validate::validate_entry;

/// A block that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockFailure {
    pub case_number: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ExtractError,
}

/// Result of assembling one block.
pub type BlockOutcome = Result<DocketEntry, BlockFailure>;

/// Everything one parse produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    /// Number of isolated case-number lines found.
    pub blocks_found: usize,
    /// Assembled entries in document order, validated.
    pub entries: Vec<DocketEntry>,
    /// Blocks dropped during extraction, in document order.
    pub failures: Vec<BlockFailure>,
}

impl ParseReport {
    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.valid).count()
    }
}

/// Build one validated entry from a case block.
pub fn assemble_entry(block: &CaseBlock<'_>) -> BlockOutcome {
    build_entry(block).map_err(|error| BlockFailure {
        case_number: block.case_number.to_string(),
        error,
    })
}

fn build_entry(block: &CaseBlock<'_>) -> Result<DocketEntry, ExtractError> {
    let fields = CaseFields::extract(block.body)?;
    let continuation_date = extract_continuation_date(fields.result.as_deref())?;

    let relief_category =
        categorize_relief(fields.relief_type.as_deref(), fields.relief_sought.as_deref());
    let status = classify_disposition(fields.result.as_deref());
    let legal = fields
        .legal
        .as_deref()
        .and_then(parse_legal_description)
        .unwrap_or_default();

    let entry = DocketEntry {
        case_number: block.case_number.to_string(),
        relief_category,
        relief_type: fields.relief_type,
        relief_sought: fields.relief_sought,
        applicant: fields.applicant,
        legal,
        hearing_date: fields.hearing.map(|h| h.date),
        hearing_time: fields.hearing.and_then(|h| h.time),
        status,
        continuation_date,
        judge: fields.judge,
        attorney: fields.attorney,
        result_text: fields.result,
        valid: true,
        validation_errors: Vec::new(),
    };

    Ok(validate_entry(entry))
}

/// Parse a full docket, keeping per-block failures alongside the entries.
pub fn parse_docket_report(text: &str) -> ParseReport {
    let blocks = segment_blocks(text);
    let mut entries = Vec::with_capacity(blocks.len());
    let mut failures = Vec::new();

    for block in &blocks {
        debug!(
            case_number = block.case_number,
            start = block.start,
            end = block.end,
            "parsing case block"
        );
        match assemble_entry(block) {
            Ok(entry) => {
                if !entry.valid {
                    debug!(
                        case_number = %entry.case_number,
                        errors = ?entry.validation_errors,
                        "entry failed validation"
                    );
                }
                entries.push(entry);
            }
            Err(failure) => {
                warn!(
                    case_number = %failure.case_number,
                    error = %failure.error,
                    "skipping case block"
                );
                failures.push(failure);
            }
        }
    }

    let report = ParseReport {
        blocks_found: blocks.len(),
        entries,
        failures,
    };
    info!(
        blocks = report.blocks_found,
        entries = report.entries.len(),
        failed = report.failures.len(),
        invalid = report.invalid_count(),
        "parsed docket"
    );
    report
}

/// Parse a full docket into its entries, dropping blocks that failed.
pub fn parse_docket(text: &str) -> Vec<DocketEntry> {
    parse_docket_report(text).entries
}

fn serialize_display<S: serde::Serializer>(
    value: &ExtractError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DispositionStatus, ReliefCategory};
    use chrono::NaiveDate;

    const SAMPLE: &str = include_str!("../testdata/sample_docket.txt");

    #[test]
    fn sample_docket_parses_in_order() {
        let report = parse_docket_report(SAMPLE);
        assert_eq!(report.blocks_found, 7);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.entries.len(), 6);

        let numbers: Vec<&str> = report.entries.iter().map(|e| e.case_number.as_str()).collect();
        assert_eq!(
            numbers,
            [
                "CD2026-000101",
                "CD2026-000102",
                "CD2026-000103",
                "CD2026-00012",
                "CD2026-000105",
                "CD2026-000107",
            ]
        );
    }

    #[test]
    fn sample_pooling_case() {
        let entries = parse_docket(SAMPLE);
        let e = &entries[0];
        assert_eq!(e.relief_category, ReliefCategory::Pooling);
        assert_eq!(e.applicant.as_deref(), Some("CANYON CREEK ENERGY, LLC"));
        assert_eq!(e.judge.as_deref(), Some("Administrative Law Judge Paul Porter"));
        assert_eq!(e.attorney.as_deref(), Some("Karen Mills"));
        assert_eq!(e.legal.section, Some(5));
        assert_eq!(e.legal.township.map(|t| t.to_string()).as_deref(), Some("13N"));
        assert_eq!(e.legal.range.map(|r| r.to_string()).as_deref(), Some("23W"));
        assert_eq!(e.legal.county.as_deref(), Some("Roger Mills"));
        assert_eq!(e.hearing_date, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(e.hearing_time.map(|t| t.to_string()).as_deref(), Some("08:30:00"));
        assert_eq!(e.status, DispositionStatus::Recommended);
        assert_eq!(e.continuation_date, None);
        assert!(e.valid);
    }

    #[test]
    fn sample_continued_spacing_case() {
        let entries = parse_docket(SAMPLE);
        let e = &entries[1];
        assert_eq!(e.relief_type.as_deref(), Some("Application for Spacing"));
        assert_eq!(e.relief_category, ReliefCategory::Spacing);
        assert_eq!(e.status, DispositionStatus::Continued);
        assert_eq!(
            e.continuation_date.map(|d| d.to_string()).as_deref(),
            Some("2026-03-15")
        );
    }

    #[test]
    fn sample_density_tie_break() {
        let entries = parse_docket(SAMPLE);
        assert_eq!(entries[2].relief_category, ReliefCategory::IncreasedDensity);
        assert_eq!(entries[2].status, DispositionStatus::Dismissed);
    }

    #[test]
    fn sample_malformed_case_number_is_flagged_not_dropped() {
        let entries = parse_docket(SAMPLE);
        let e = entries
            .iter()
            .find(|e| e.case_number == "CD2026-00012")
            .expect("malformed case still emitted");
        assert!(!e.valid);
        assert_eq!(e.validation_errors.len(), 1);
        assert_eq!(e.relief_category, ReliefCategory::OperatorChange);
    }

    #[test]
    fn sample_block_without_relief_type() {
        let entries = parse_docket(SAMPLE);
        let e = &entries[4];
        assert_eq!(e.case_number, "CD2026-000105");
        assert_eq!(e.relief_type, None);
        assert_eq!(e.relief_category, ReliefCategory::Other);
        assert_eq!(e.status, DispositionStatus::Unknown);
        assert!(e.legal.is_empty());
    }

    #[test]
    fn sample_bad_date_block_is_skipped() {
        let report = parse_docket_report(SAMPLE);
        assert_eq!(report.failures[0].case_number, "CD2026-000106");
        assert!(matches!(
            report.failures[0].error,
            ExtractError::InvalidHearingDate(_)
        ));
    }

    #[test]
    fn inline_case_reference_stays_in_block() {
        let entries = parse_docket(SAMPLE);
        let e = &entries[5];
        assert_eq!(e.case_number, "CD2026-000107");
        assert_eq!(e.status, DispositionStatus::UnderAdvisement);
        assert_eq!(e.relief_category, ReliefCategory::HorizontalWell);
        assert!(e.relief_sought.as_deref().unwrap().contains("CD2025-004411"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = serde_json::to_string(&parse_docket(SAMPLE)).unwrap();
        let second = serde_json::to_string(&parse_docket(SAMPLE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn entry_count_bounded_by_blocks() {
        let report = parse_docket_report(SAMPLE);
        assert!(report.entries.len() <= report.blocks_found);
        assert_eq!(
            report.entries.len() + report.failures.len(),
            report.blocks_found
        );
    }

    #[test]
    fn spacing_continuance_scenario() {
        let text = "CD2026-000999\nRelief Type: Application for Spacing\nResult: C - 03/15/2026\n";
        let entries = parse_docket(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relief_category, ReliefCategory::Spacing);
        assert_eq!(entries[0].status, DispositionStatus::Continued);
        assert_eq!(entries[0].continuation_date, NaiveDate::from_ymd_opt(2026, 3, 15));
    }

    #[test]
    fn weekday_in_prose_keeps_the_block() {
        let text = "\
CD2026-000501
Relief Type: Increased Density
Relief Sought: wells completed Monday through 3 2026
Tuesday, March 3, 2026 9:00 AM

CD2026-000502
Relief Type: Spacing
Monday, Sept 14, 2026 9:00 AM
";
        let report = parse_docket_report(text);
        assert!(report.failures.is_empty(), "failures: {:?}", report.failures);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].hearing_date, NaiveDate::from_ymd_opt(2026, 3, 3));
        assert_eq!(report.entries[1].hearing_date, None);
    }

    #[test]
    fn empty_document_yields_nothing() {
        let report = parse_docket_report("");
        assert_eq!(report.blocks_found, 0);
        assert!(report.entries.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn entry_json_shape() {
        let entries = parse_docket(SAMPLE);
        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!(json["relief_category"], "SPACING");
        assert_eq!(json["status"], "CONTINUED");
        assert_eq!(json["continuation_date"], "2026-03-15");
        assert_eq!(json["hearing_date"], "2026-03-02");
        assert_eq!(json["legal"]["township"], "12N");
    }

    #[test]
    fn deserialized_entry_revalidates() {
        let entries = parse_docket(SAMPLE);
        let json = serde_json::to_string(&entries[3]).unwrap();
        let mut back: DocketEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries[3]);

        back.case_number = "CD2026-000012".into();
        let back = validate_entry(back);
        assert!(back.valid);
        assert!(back.validation_errors.is_empty());
    }

    #[test]
    fn failure_serializes_message() {
        let report = parse_docket_report(SAMPLE);
        let json = serde_json::to_value(&report.failures[0]).unwrap();
        assert_eq!(json["case_number"], "CD2026-000106");
        assert!(json["error"].as_str().unwrap().starts_with("hearing date"));
    }
}
