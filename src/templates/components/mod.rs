use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod results;
pub mod search_form;

pub use card::listing_card;
pub use error::error_page;
pub use results::results_section;
pub use search_form::search_form;

pub fn badge(label: &str, class: &str) -> Markup {
    html! {
        span class=(format!("badge {class}")) { (label) }
    }
}
