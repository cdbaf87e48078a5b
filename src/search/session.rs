// src/search/session.rs

use crate::domain::{Listing, Purpose};
use crate::search::{apply_filters, parse_search_query, present, FilterCriteria, ResultView};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet window before typed text is re-parsed.
    pub debounce: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}

/// Browsing state for one visitor: the shared listing snapshot plus the
/// current criteria. Every change recomputes from the full snapshot.
#[derive(Debug, Clone)]
pub struct SearchSession {
    listings: Arc<Vec<Listing>>,
    criteria: FilterCriteria,
}

impl SearchSession {
    pub fn new(listings: Arc<Vec<Listing>>) -> Self {
        Self {
            listings,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Re-parse the free text. The new state replaces the old one.
    pub fn set_query(&mut self, text: &str) {
        self.criteria.search = parse_search_query(text);
        debug!(
            intent = ?self.criteria.search.intent,
            tokens = ?self.criteria.search.tokens,
            "search query parsed"
        );
    }

    pub fn set_badge(&mut self, badge: Option<Purpose>) {
        self.criteria.badge = badge;
    }

    pub fn set_featured_only(&mut self, featured_only: bool) {
        self.criteria.featured_only = featured_only;
    }

    pub fn toggle_featured(&mut self) {
        self.criteria.featured_only = !self.criteria.featured_only;
    }

    pub fn results(&self) -> ResultView<'_> {
        let outcome = apply_filters(&self.listings, &self.criteria);
        present(outcome, &self.criteria)
    }
}
