//! Splits docket text into per-case blocks.
//!
//! A block starts at a case number standing alone on its line and runs to
//! the next such line. Case numbers quoted inside running text are not
//! boundaries.

use std::sync::LazyLock;

use regex::Regex;

/// Case-number-shaped token alone on a line. Exact `CD####-######` shape is
/// checked later by the validator, so near-misses still get a block.
static CASE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(CD\d{4}-\d+)[ \t]*\r?$").unwrap());

/// One case's slice of the docket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseBlock<'a> {
    pub case_number: &'a str,
    /// Byte offset of the case-number line.
    pub start: usize,
    /// Start of the next case-number line, or end of document.
    pub end: usize,
    /// Text after the case-number line, up to `end`.
    pub body: &'a str,
}

/// Locate every case block, in document order.
pub fn segment_blocks(text: &str) -> Vec<CaseBlock<'_>> {
    let markers: Vec<(usize, usize, &str)> = CASE_LINE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let line = caps.get(0)?;
            Some((line.start(), line.end(), caps.get(1)?.as_str()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(start, line_end, case_number))| {
            let end = markers.get(i + 1).map(|m| m.0).unwrap_or(text.len());
            CaseBlock {
                case_number,
                start,
                end,
                body: &text[line_end..end],
            }
        })
        .collect()
}
