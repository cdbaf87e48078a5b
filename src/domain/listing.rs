// src/domain/listing.rs

use crate::search::normalize_text;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Transaction purpose of a listing, and the intent a search can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Sale,
    Rental,
}

impl Purpose {
    /// Case/accent-insensitive parse. The store uses the Portuguese values
    /// ("venda", "aluguel", "locação"), the UI uses "sale" / "rental".
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_text(raw).as_str() {
            "sale" | "venda" => Some(Purpose::Sale),
            "rental" | "rent" | "aluguel" | "locacao" => Some(Purpose::Rental),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Sale => "For sale",
            Purpose::Rental => "For rent",
        }
    }
}

/// A property (imóvel) as exposed to the public site. Read-only projection
/// of the `listings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub property_type: String,
    /// Raw store value; compare through `purpose()`.
    pub purpose: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub reference_code: String,
    pub featured: bool,
    pub price: Option<i64>,

    // Display only
    pub bedrooms: Option<i64>,
    pub area_m2: Option<f64>,
    pub cover_image_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Listing {
    pub fn purpose(&self) -> Option<Purpose> {
        Purpose::parse(&self.purpose)
    }

    /// Fields free-text tokens are matched against, already normalized.
    pub fn search_fields(&self) -> [String; 6] {
        [
            normalize_text(&self.title),
            normalize_text(&self.property_type),
            normalize_text(&self.purpose),
            normalize_text(&self.neighborhood),
            normalize_text(&self.city),
            normalize_text(&self.reference_code),
        ]
    }

    /// "R$ 450.000", with "/month" for rentals. Null or zero is "On request".
    pub fn price_label(&self) -> String {
        match self.price {
            Some(p) if p > 0 => {
                let amount = format!("R$ {}", group_thousands(p));
                if self.purpose() == Some(Purpose::Rental) {
                    format!("{amount}/month")
                } else {
                    amount
                }
            }
            _ => "On request".to_string(),
        }
    }

    /// "Bessa, João Pessoa - PB", skipping empty parts.
    pub fn location_label(&self) -> String {
        let place = [self.neighborhood.as_str(), self.city.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        match (place.is_empty(), self.state.is_empty()) {
            (_, true) => place,
            (true, false) => self.state.clone(),
            (false, false) => format!("{place} - {}", self.state),
        }
    }
}

/// Brazilian thousands grouping: 1250000 -> "1.250.000".
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
pub(crate) fn sample_listing(id: i64, purpose: &str, featured: bool) -> Listing {
    Listing {
        id,
        title: format!("Imóvel {id}"),
        property_type: "Apartamento".to_string(),
        purpose: purpose.to_string(),
        neighborhood: "Centro".to_string(),
        city: "João Pessoa".to_string(),
        state: "PB".to_string(),
        reference_code: format!("REF{id:03}"),
        featured,
        price: Some(350_000),
        bedrooms: Some(2),
        area_m2: Some(68.0),
        cover_image_url: None,
        created_at: None,
    }
}
