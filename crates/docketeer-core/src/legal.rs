//! Section/Township/Range/County resolver for `Legal:` strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{normalize_county, normalize_range, normalize_section, normalize_township};
use crate::types::{LegalDescription, MERIDIAN};

/// `S<section> T<township> R<range> <county>`, direction letters attached.
static LEGAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bS(?:EC(?:TION)?)?\.?\s*(\d{1,3})\s+T\.?\s*(\d{1,3}\s*[NS])\s+R\.?\s*(\d{1,3}\s*[EW])\b\s*([^;,\n]*)",
    )
    .unwrap()
});

/// Resolve a free-text legal description into its components.
///
/// Returns `None` only when the combined pattern does not match at all.
/// A match whose pieces fail normalisation (e.g. section 40) still yields a
/// description with those pieces left empty.
pub fn parse_legal_description(text: &str) -> Option<LegalDescription> {
    let caps = LEGAL_RE.captures(text)?;
    let piece = |i: usize| caps.get(i).map(|m| m.as_str());

    Some(LegalDescription {
        section: normalize_section(piece(1)),
        township: normalize_township(piece(2)),
        range: normalize_range(piece(3)),
        county: normalize_county(piece(4)),
        meridian: MERIDIAN.to_string(),
    })
}
