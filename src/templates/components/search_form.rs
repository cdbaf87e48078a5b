use crate::domain::Purpose;
use crate::search::FilterCriteria;
use maud::{html, Markup};
use std::time::Duration;

/// Free-text box, purpose badges and the featured toggle. Typing refreshes
/// `#results` after `debounce` of quiet (htmx drops the pending request on
/// each keystroke); badge and toggle changes refresh immediately.
pub fn search_form(query: &str, criteria: &FilterCriteria, debounce: Duration) -> Markup {
    let trigger = format!(
        "input changed delay:{}ms from:#q, change from:.filter-input, submit",
        debounce.as_millis()
    );
    let badges: [(&str, &str, Option<Purpose>); 3] = [
        ("all", "All", None),
        ("sale", "Buy", Some(Purpose::Sale)),
        ("rental", "Rent", Some(Purpose::Rental)),
    ];

    html! {
        form
            id="search-form"
            method="get"
            action="/"
            role="search"
            hx-get="/imoveis/search"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-trigger=(trigger)
        {
            label class="sr-only" for="q" { "Search" }
            input
                type="search"
                id="q"
                name="q"
                value=(query)
                placeholder="e.g. alugar apartamento no Bessa"
                autocomplete="off";

            fieldset class="purpose-badges" {
                @for (value, label, purpose) in badges {
                    label class="badge-option" {
                        input
                            type="radio"
                            class="filter-input"
                            name="purpose"
                            value=(value)
                            checked[criteria.badge == purpose];
                        (label)
                    }
                }
            }

            label class="featured-toggle" {
                input
                    type="checkbox"
                    class="filter-input"
                    name="featured"
                    value="1"
                    checked[criteria.featured_only];
                "Featured only"
            }

            button type="submit" class="primary" { "Search" }
        }
    }
}
