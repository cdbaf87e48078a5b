use crate::domain::SiteSettings;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, settings: &SiteSettings, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (settings.site_name) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { (settings.site_name) }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/?purpose=sale" { "Buy" } }
                            li { a href="/?purpose=rental" { "Rent" } }
                        }
                    }
                    @if let Some(phone) = &settings.phone {
                        a href=(format!("tel:{phone}")) class="phone" { (phone) }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { (settings.site_name) }
                    @if let Some(link) = settings.whatsapp_link() {
                        a href=(link) class="whatsapp" target="_blank" rel="noopener" { "WhatsApp" }
                    }
                }
            }
        }
    }
}
