//! Canonical forms for the raw pieces of a legal land description.
//!
//! Each normaliser takes whatever substring the docket printed and returns
//! the canonical value, or `None` when the input does not fit the grammar.
//! A non-match is an ordinary outcome here, never an error.
//!
//! # Docket conventions
//!
//! - Township: `13N`, `013N`, `13 N`, `13 North` → `13N`
//! - Range: `23W`, `023W`, `23 west` → `23W`
//! - Section: `5`, `05`, `S5`, `Sec. 5`, `Section 05` → `5` (1–36 only)
//! - County: `ROGER MILLS (1)`, `Roger Mills*` → `Roger Mills`

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{EastWest, NorthSouth, Range, Township};

static TOWNSHIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*0?(\d{1,2})\s*(NORTH|SOUTH|N|S)\s*$").unwrap());
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*0?(\d{1,2})\s*(EAST|WEST|E|W)\s*$").unwrap());
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:SECTION|SEC|S)?\.?\s*(\d{1,2})\s*$").unwrap());
static FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\([^()]*\)|\*+)\s*$").unwrap());

/// Parse a 1–99 coordinate number, rejecting zero.
fn coordinate_number(digits: &str) -> Option<u8> {
    digits.parse::<u8>().ok().filter(|n| (1..=99).contains(n))
}

/// Normalise a township token such as `013N` or `13 North` to `13N`.
pub fn normalize_township(raw: Option<&str>) -> Option<Township> {
    let caps = TOWNSHIP_RE.captures(raw?)?;
    let number = coordinate_number(caps.get(1)?.as_str())?;
    let direction = match caps.get(2)?.as_str().as_bytes()[0].to_ascii_uppercase() {
        b'N' => NorthSouth::North,
        _ => NorthSouth::South,
    };
    Some(Township { number, direction })
}

/// Normalise a range token such as `023W` or `23 West` to `23W`.
pub fn normalize_range(raw: Option<&str>) -> Option<Range> {
    let caps = RANGE_RE.captures(raw?)?;
    let number = coordinate_number(caps.get(1)?.as_str())?;
    let direction = match caps.get(2)?.as_str().as_bytes()[0].to_ascii_uppercase() {
        b'E' => EastWest::East,
        _ => EastWest::West,
    };
    Some(Range { number, direction })
}

/// Normalise a section token (`05`, `S5`, `Sec. 5`, `Section 05`).
///
/// Numbers outside 1–36 are a non-match.
pub fn normalize_section(raw: Option<&str>) -> Option<u8> {
    let caps = SECTION_RE.captures(raw?)?;
    caps.get(1)?
        .as_str()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=36).contains(n))
}

/// Strip trailing footnote markers and title-case a county name.
pub fn normalize_county(raw: Option<&str>) -> Option<String> {
    let mut name = raw?.trim();
    // Markers can stack, e.g. "ROGER MILLS (1)*".
    while let Some(m) = FOOTNOTE_RE.find(name) {
        name = name[..m.start()].trim_end();
    }

    let words: Vec<String> = name.split_whitespace().map(title_case).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_alpha = false;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
