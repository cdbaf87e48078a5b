use crate::domain::{Listing, SiteSettings};
use crate::templates::desktop_layout;
use maud::{html, Markup};
use url::form_urlencoded::byte_serialize;

pub fn listing_page(listing: &Listing, settings: &SiteSettings) -> Markup {
    desktop_layout(
        &listing.title,
        settings,
        html! {
            main class="container listing-detail" {
                p { a href="/" { "← Back to search" } }

                @if let Some(src) = &listing.cover_image_url {
                    img class="cover" src=(src) alt=(listing.title);
                }

                h1 { (listing.title) }
                p class="location" { (listing.location_label()) }
                p class="price" { (listing.price_label()) }

                table class="facts" {
                    tbody {
                        tr { th { "Type" } td { (listing.property_type) } }
                        tr {
                            th { "Purpose" }
                            td {
                                @match listing.purpose() {
                                    Some(p) => { (p.label()) }
                                    None => { (listing.purpose) }
                                }
                            }
                        }
                        @if let Some(beds) = listing.bedrooms {
                            tr { th { "Bedrooms" } td { (beds) } }
                        }
                        @if let Some(area) = listing.area_m2 {
                            tr { th { "Area" } td { (format!("{area:.0}")) " m²" } }
                        }
                        @if !listing.reference_code.is_empty() {
                            tr { th { "Reference" } td { (listing.reference_code) } }
                        }
                    }
                }

                @if let Some(link) = contact_link(listing, settings) {
                    a class="primary whatsapp" href=(link) target="_blank" rel="noopener" {
                        "Ask about this property"
                    }
                }
            }
        },
    )
}

/// WhatsApp link with a prefilled message naming the listing.
fn contact_link(listing: &Listing, settings: &SiteSettings) -> Option<String> {
    let base = settings.whatsapp_link()?;
    let subject = if listing.reference_code.is_empty() {
        listing.title.clone()
    } else {
        format!("{} (ref. {})", listing.title, listing.reference_code)
    };
    let message = format!("Hello! I'm interested in {subject}.");
    let encoded: String = byte_serialize(message.as_bytes()).collect();
    Some(format!("{base}?text={encoded}"))
}
