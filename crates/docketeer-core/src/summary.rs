//! Per-document counts over a [`ParseReport`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::pipeline::ParseReport;
use crate::relevance::is_relevant;
use crate::types::{DispositionStatus, ReliefCategory};

/// Summary statistics for one parsed docket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocketSummary {
    pub blocks_found: usize,
    pub entries: usize,
    pub failed_blocks: usize,
    pub invalid_entries: usize,
    pub relevant_entries: usize,
    pub by_category: BTreeMap<ReliefCategory, usize>,
    pub by_status: BTreeMap<DispositionStatus, usize>,
}

impl DocketSummary {
    pub fn from_report(report: &ParseReport) -> Self {
        let mut by_category = BTreeMap::new();
        let mut by_status = BTreeMap::new();
        let mut relevant_entries = 0;

        for entry in &report.entries {
            *by_category.entry(entry.relief_category).or_insert(0) += 1;
            *by_status.entry(entry.status).or_insert(0) += 1;
            if is_relevant(entry.relief_category) {
                relevant_entries += 1;
            }
        }

        Self {
            blocks_found: report.blocks_found,
            entries: report.entries.len(),
            failed_blocks: report.failures.len(),
            invalid_entries: report.invalid_count(),
            relevant_entries,
            by_category,
            by_status,
        }
    }
}
