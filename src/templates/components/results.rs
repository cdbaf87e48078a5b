use crate::search::ResultView;
use crate::templates::components::listing_card;
use maud::{html, Markup};

pub const NO_EXACT_MATCH: &str = "No exact match for your search. Showing our featured listings instead.";
pub const EMPTY_CATEGORY: &str = "No listings in this category right now.";

/// The `#results` block. Rendered inside the home page and on its own for
/// htmx refreshes.
pub fn results_section(view: &ResultView<'_>) -> Markup {
    html! {
        section id="results" class="results" aria-live="polite" {
            h2 { (view.label) " " span class="count" { "(" (view.listings.len()) ")" } }

            @if view.used_fallback {
                p class="no-match" { (NO_EXACT_MATCH) }
            }

            @if view.listings.is_empty() {
                p class="empty" { (EMPTY_CATEGORY) }
            } @else {
                div class="listing-grid" {
                    @for listing in &view.listings {
                        (listing_card(listing))
                    }
                }
            }
        }
    }
}
