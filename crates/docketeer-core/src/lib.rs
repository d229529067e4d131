//! Hearing-docket parser: turns linearized docket text into validated case entries.

pub mod classify;
mod error;
pub mod extract;
pub mod legal;
pub mod normalize;
pub mod pipeline;
pub mod relevance;
pub mod schema;
pub mod segment;
pub mod summary;
pub mod types;
pub mod validate;

pub use error::ExtractError;
pub use pipeline::{BlockFailure, BlockOutcome, ParseReport, parse_docket, parse_docket_report};
pub use relevance::{RELEVANT_CATEGORIES, filter_relevant, is_relevant};
pub use schema::docket;
pub use summary::DocketSummary;
pub use types::{
    DispositionStatus, DocketEntry, EastWest, LegalDescription, MERIDIAN, NorthSouth, Range,
    ReliefCategory, Township,
};
