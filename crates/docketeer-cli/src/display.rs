//! Vertical card display for docket entries.
//!
//! Renders each row of an entry RecordBatch as a grouped, human-readable
//! card. Sections with no values for a row are skipped.

use std::fmt::Write as _;

use arrow::array::{Array, ListArray, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use docketeer_core::DocketSummary;

// ── Schema section groupings ──

const CASE: &[&str] = &[
    "relief_category",
    "relief_type",
    "relief_sought",
    "applicant",
    "attorney",
    "judge",
];

const LOCATION: &[&str] = &["section", "township", "range", "county"];

const HEARING: &[&str] = &["hearing_date", "hearing_time"];

const OUTCOME: &[&str] = &["status", "continuation_date", "result_text"];

const VALIDATION: &[&str] = &["valid", "validation_errors"];

// ── Public API ──

/// Render every entry in `batch` as a card.
pub fn render_cards(batch: &RecordBatch) -> anyhow::Result<String> {
    let mut out = String::new();
    let case_numbers = batch
        .column_by_name("case_number")
        .and_then(|c| c.as_any().downcast_ref::<StringArray>())
        .ok_or_else(|| anyhow::anyhow!("missing 'case_number' column"))?;

    for row in 0..batch.num_rows() {
        writeln!(out, "=== {} ===", case_numbers.value(row))?;
        writeln!(out)?;
        render_section(&mut out, batch, row, "Case", CASE)?;
        render_section(&mut out, batch, row, "Location", LOCATION)?;
        render_section(&mut out, batch, row, "Hearing", HEARING)?;
        render_section(&mut out, batch, row, "Outcome", OUTCOME)?;
        render_section(&mut out, batch, row, "Validation", VALIDATION)?;
    }

    Ok(out)
}

/// Render document-level counts.
pub fn render_summary(summary: &DocketSummary) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "Docket summary")?;
    writeln!(out, "  {:<22} {}", "blocks_found", summary.blocks_found)?;
    writeln!(out, "  {:<22} {}", "entries", summary.entries)?;
    writeln!(out, "  {:<22} {}", "failed_blocks", summary.failed_blocks)?;
    writeln!(out, "  {:<22} {}", "invalid_entries", summary.invalid_entries)?;
    writeln!(out, "  {:<22} {}", "relevant_entries", summary.relevant_entries)?;

    if !summary.by_category.is_empty() {
        writeln!(out, "By relief category")?;
        for (category, count) in &summary.by_category {
            writeln!(out, "  {:<22} {}", category.as_str(), count)?;
        }
    }
    if !summary.by_status.is_empty() {
        writeln!(out, "By disposition")?;
        for (status, count) in &summary.by_status {
            writeln!(out, "  {:<22} {}", status.as_str(), count)?;
        }
    }
    Ok(out)
}

// ── Section rendering ──

fn render_section(
    out: &mut String,
    batch: &RecordBatch,
    row: usize,
    header: &str,
    cols: &[&str],
) -> anyhow::Result<()> {
    let present: Vec<(&str, &dyn Array)> = cols
        .iter()
        .filter_map(|&name| batch.column_by_name(name).map(|c| (name, c.as_ref())))
        .filter(|(_, col)| has_value(*col, row))
        .collect();
    if present.is_empty() {
        return Ok(());
    }

    let options = FormatOptions::default();
    writeln!(out, "{header}")?;
    for (name, col) in present {
        let formatter = ArrayFormatter::try_new(col, &options)?;
        writeln!(out, "  {:<22} {}", name, formatter.value(row))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Non-null, and for lists, non-empty.
fn has_value(col: &dyn Array, row: usize) -> bool {
    if col.is_null(row) {
        return false;
    }
    match col.data_type() {
        DataType::List(_) => col
            .as_any()
            .downcast_ref::<ListArray>()
            .is_some_and(|list| list.value_length(row) > 0),
        _ => true,
    }
}
