use crate::domain::Listing;
use crate::search::{FilterCriteria, FilterOutcome};
use serde::Serialize;

pub const SEARCH_RESULTS_LABEL: &str = "Search results";

/// Render-ready view of one filter pass. Consumed by the HTML templates and
/// serialized as-is by the JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView<'a> {
    pub label: String,
    pub search_active: bool,
    pub used_fallback: bool,
    pub listings: Vec<&'a Listing>,
}

pub fn present<'a>(outcome: FilterOutcome<'a>, criteria: &FilterCriteria) -> ResultView<'a> {
    ResultView {
        label: filter_label(criteria),
        search_active: criteria.search.is_active(),
        used_fallback: outcome.used_fallback,
        listings: outcome.listings,
    }
}

/// "Search results" whenever a search is active, otherwise the purpose label
/// with " · Featured" appended when the featured toggle is on.
pub fn filter_label(criteria: &FilterCriteria) -> String {
    if criteria.search.is_active() {
        return SEARCH_RESULTS_LABEL.to_string();
    }

    let purpose = criteria.badge.map(|p| p.label()).unwrap_or("All");
    if criteria.featured_only {
        format!("{purpose} · Featured")
    } else {
        purpose.to_string()
    }
}
