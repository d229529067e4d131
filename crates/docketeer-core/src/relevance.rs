//! Relief categories that matter to mineral-owner alerting.

use crate::types::{DocketEntry, ReliefCategory};

/// Default allow-list: relief that can affect an owner's interest in a tract.
pub const RELEVANT_CATEGORIES: &[ReliefCategory] = &[
    ReliefCategory::IncreasedDensity,
    ReliefCategory::Pooling,
    ReliefCategory::Spacing,
    ReliefCategory::LocationException,
    ReliefCategory::HorizontalWell,
];

pub fn is_relevant(category: ReliefCategory) -> bool {
    RELEVANT_CATEGORIES.contains(&category)
}

/// Entries whose category is on the default allow-list, in input order.
pub fn filter_relevant(entries: &[DocketEntry]) -> Vec<&DocketEntry> {
    filter_by_categories(entries, RELEVANT_CATEGORIES)
}

/// Entries whose category is in `allowed`, in input order.
pub fn filter_by_categories<'a>(
    entries: &'a [DocketEntry],
    allowed: &[ReliefCategory],
) -> Vec<&'a DocketEntry> {
    entries
        .iter()
        .filter(|e| allowed.contains(&e.relief_category))
        .collect()
}
