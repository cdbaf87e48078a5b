// src/search/filter.rs

use crate::domain::{Listing, Purpose};
use crate::search::SearchState;

/// Everything that narrows the cached listing set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Purpose badge; `None` is "all". Ignored while the search carries an intent.
    pub badge: Option<Purpose>,
    pub featured_only: bool,
    pub search: SearchState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub listings: Vec<&'a Listing>,
    /// Set when an active search matched nothing and the featured set was
    /// returned instead.
    pub used_fallback: bool,
}

/// Filter the cache, keeping cache order. An active search with no hits
/// falls back to every featured listing, regardless of badge and toggle.
pub fn apply_filters<'a>(cache: &'a [Listing], criteria: &FilterCriteria) -> FilterOutcome<'a> {
    let listings: Vec<&Listing> = cache
        .iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .collect();

    if listings.is_empty() && criteria.search.is_active() {
        return FilterOutcome {
            listings: cache.iter().filter(|l| l.featured).collect(),
            used_fallback: true,
        };
    }

    FilterOutcome {
        listings,
        used_fallback: false,
    }
}

/// Predicates are evaluated in a fixed order; the first failure excludes.
fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let search = &criteria.search;

    match search.intent {
        Some(intent) => {
            if listing.purpose() != Some(intent) {
                return false;
            }
        }
        None => {
            if let Some(badge) = criteria.badge {
                if listing.purpose() != Some(badge) {
                    return false;
                }
            }
        }
    }

    if criteria.featured_only && !listing.featured {
        return false;
    }

    if search.tokens.is_empty() {
        return true;
    }

    let fields = listing.search_fields();
    search
        .tokens
        .iter()
        .any(|token| fields.iter().any(|field| field.contains(token.as_str())))
}
