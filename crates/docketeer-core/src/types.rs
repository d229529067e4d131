//! Docket entry types shared by the parser, the projections and the CLI.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Principal meridian for every parsed legal description (Indian Meridian).
pub const MERIDIAN: &str = "IM";

/// Township direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NorthSouth {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
}

impl NorthSouth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }
}

/// Range direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EastWest {
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl EastWest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::East => "E",
            Self::West => "W",
        }
    }
}

/// A PLSS township, canonically written `{number}{N|S}` (e.g. `13N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Township {
    pub number: u8,
    pub direction: NorthSouth,
}

/// A PLSS range, canonically written `{number}{E|W}` (e.g. `23W`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Range {
    pub number: u8,
    pub direction: EastWest,
}

impl fmt::Display for Township {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.direction.as_str())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.direction.as_str())
    }
}

impl From<Township> for String {
    fn from(t: Township) -> Self {
        t.to_string()
    }
}

impl From<Range> for String {
    fn from(r: Range) -> Self {
        r.to_string()
    }
}

/// Split a canonical `{digits}{letter}` coordinate into its parts.
fn split_coordinate(s: &str) -> Option<(u8, char)> {
    let s = s.trim();
    let letter = s.chars().last()?;
    let digits = &s[..s.len() - letter.len_utf8()];
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u8 = digits.parse().ok()?;
    (number > 0).then_some((number, letter.to_ascii_uppercase()))
}

impl TryFrom<String> for Township {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let (number, direction) = match split_coordinate(&s) {
            Some((number, 'N')) => (number, NorthSouth::North),
            Some((number, 'S')) => (number, NorthSouth::South),
            _ => return Err(format!("invalid township {s:?}")),
        };
        Ok(Self { number, direction })
    }
}

impl TryFrom<String> for Range {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let (number, direction) = match split_coordinate(&s) {
            Some((number, 'E')) => (number, EastWest::East),
            Some((number, 'W')) => (number, EastWest::West),
            _ => return Err(format!("invalid range {s:?}")),
        };
        Ok(Self { number, direction })
    }
}

/// Section/Township/Range/County location of the land a case concerns.
///
/// Every component is independently optional; an all-empty value is still a
/// valid description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDescription {
    pub section: Option<u8>,
    pub township: Option<Township>,
    pub range: Option<Range>,
    pub county: Option<String>,
    pub meridian: String,
}

impl Default for LegalDescription {
    fn default() -> Self {
        Self {
            section: None,
            township: None,
            range: None,
            county: None,
            meridian: MERIDIAN.to_string(),
        }
    }
}

impl LegalDescription {
    pub fn is_empty(&self) -> bool {
        self.section.is_none()
            && self.township.is_none()
            && self.range.is_none()
            && self.county.is_none()
    }
}

/// Category of regulatory relief a case requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReliefCategory {
    IncreasedDensity,
    Pooling,
    Spacing,
    LocationException,
    HorizontalWell,
    OperatorChange,
    WellTransfer,
    OrderModification,
    Enforcement,
    Other,
}

impl ReliefCategory {
    pub const ALL: [ReliefCategory; 10] = [
        Self::IncreasedDensity,
        Self::Pooling,
        Self::Spacing,
        Self::LocationException,
        Self::HorizontalWell,
        Self::OperatorChange,
        Self::WellTransfer,
        Self::OrderModification,
        Self::Enforcement,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IncreasedDensity => "INCREASED_DENSITY",
            Self::Pooling => "POOLING",
            Self::Spacing => "SPACING",
            Self::LocationException => "LOCATION_EXCEPTION",
            Self::HorizontalWell => "HORIZONTAL_WELL",
            Self::OperatorChange => "OPERATOR_CHANGE",
            Self::WellTransfer => "WELL_TRANSFER",
            Self::OrderModification => "ORDER_MODIFICATION",
            Self::Enforcement => "ENFORCEMENT",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ReliefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReliefCategory {
    type Err = String;

    /// Accepts the canonical name, case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown relief category {s:?}"))
    }
}

/// Outcome or scheduling status recorded for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispositionStatus {
    Continued,
    Dismissed,
    Recommended,
    Heard,
    Withdrawn,
    UnderAdvisement,
    Approved,
    Denied,
    Scheduled,
    Unknown,
}

impl DispositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continued => "CONTINUED",
            Self::Dismissed => "DISMISSED",
            Self::Recommended => "RECOMMENDED",
            Self::Heard => "HEARD",
            Self::Withdrawn => "WITHDRAWN",
            Self::UnderAdvisement => "UNDER_ADVISEMENT",
            Self::Approved => "APPROVED",
            Self::Denied => "DENIED",
            Self::Scheduled => "SCHEDULED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DispositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed case from a hearing docket.
///
/// Extracted fields are fixed at assembly; validation only fills `valid`
/// and `validation_errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocketEntry {
    pub case_number: String,
    pub relief_category: ReliefCategory,
    pub relief_type: Option<String>,
    pub relief_sought: Option<String>,
    pub applicant: Option<String>,
    pub legal: LegalDescription,
    pub hearing_date: Option<NaiveDate>,
    pub hearing_time: Option<NaiveTime>,
    pub status: DispositionStatus,
    pub continuation_date: Option<NaiveDate>,
    pub judge: Option<String>,
    pub attorney: Option<String>,
    pub result_text: Option<String>,
    pub valid: bool,
    pub validation_errors: Vec<String>,
}
