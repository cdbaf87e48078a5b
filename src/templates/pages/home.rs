// templates/pages/home.rs

use crate::domain::SiteSettings;
use crate::search::{FilterCriteria, ResultView};
use crate::templates::{desktop_layout, results_section, search_form};
use maud::{html, Markup};
use std::time::Duration;

pub struct HomeVm<'a> {
    pub settings: &'a SiteSettings,
    pub query: &'a str,
    pub criteria: &'a FilterCriteria,
    pub view: &'a ResultView<'a>,
    pub debounce: Duration,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Home",
        vm.settings,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { (vm.settings.hero_title) }
                    p { (vm.settings.hero_subtitle) }
                    (search_form(vm.query, vm.criteria, vm.debounce))
                }

                (results_section(vm.view))
            }
        },
    )
}
