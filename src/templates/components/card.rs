use crate::domain::{Listing, Purpose};
use crate::templates::components::badge;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card listing-card" {
            a href=(format!("/imoveis/{}", listing.id)) {
                @if let Some(src) = &listing.cover_image_url {
                    img src=(src) alt=(listing.title) loading="lazy";
                }
                div class="card-body" {
                    div class="badges" {
                        @match listing.purpose() {
                            Some(Purpose::Sale) => { (badge("Sale", "sale")) }
                            Some(Purpose::Rental) => { (badge("Rent", "rental")) }
                            None => { (badge(&listing.purpose, "other")) }
                        }
                        @if listing.featured {
                            (badge("Featured", "featured"))
                        }
                    }
                    h3 { (listing.title) }
                    p class="location" { (listing.location_label()) }
                    p class="facts" {
                        (listing.property_type)
                        @if let Some(beds) = listing.bedrooms {
                            " · " (beds) " bedrooms"
                        }
                        @if let Some(area) = listing.area_m2 {
                            " · " (format!("{area:.0}")) " m²"
                        }
                    }
                    p class="price" { (listing.price_label()) }
                    @if !listing.reference_code.is_empty() {
                        p class="ref" { "Ref. " (listing.reference_code) }
                    }
                }
            }
        }
    }
}
