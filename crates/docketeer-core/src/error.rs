use thiserror::Error;

/// Failure to turn one case block into an entry.
///
/// Only raised for text that matched a field's pattern but does not denote
/// a real value; a field that is simply missing is `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("hearing date is not a calendar date: {0:?}")]
    InvalidHearingDate(String),

    #[error("hearing time is not a 12-hour clock time: {0:?}")]
    InvalidHearingTime(String),

    #[error("continuation date is not a calendar date: {0:?}")]
    InvalidContinuationDate(String),
}
