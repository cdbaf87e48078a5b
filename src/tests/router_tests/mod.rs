mod api_tests;
mod home_tests;
mod listing_tests;

use crate::app::AppState;
use crate::tests::utils::{init_test_db, insert_listing, set_setting, NewListing};
use astra::{Body, Request};
use http::Method;

/// Small catalogue used by every router test:
/// 1 featured house for sale in Bessa, 2 apartment for rent in Manaíra,
/// 3 featured flat for rent in Cabo Branco, 4 land for sale without price.
pub fn seeded_state(name: &str) -> AppState {
    let db = init_test_db(name);

    insert_listing(&db, &NewListing {
        title: "Casa com piscina",
        property_type: "Casa",
        purpose: "venda",
        neighborhood: "Bessa",
        reference_code: "CA100",
        featured: true,
        created_at: "2024-01-04 09:00:00",
        ..NewListing::default()
    });
    insert_listing(&db, &NewListing {
        title: "Apartamento mobiliado",
        property_type: "Apartamento",
        purpose: "aluguel",
        neighborhood: "Manaíra",
        reference_code: "AP200",
        price: Some(2_800),
        created_at: "2024-01-03 09:00:00",
        ..NewListing::default()
    });
    insert_listing(&db, &NewListing {
        title: "Flat beira-mar",
        property_type: "Flat",
        purpose: "ALUGUEL",
        neighborhood: "Cabo Branco",
        reference_code: "FL300",
        featured: true,
        price: Some(3_500),
        created_at: "2024-01-02 09:00:00",
        ..NewListing::default()
    });
    insert_listing(&db, &NewListing {
        title: "Terreno esquina",
        property_type: "Terreno",
        purpose: "venda",
        neighborhood: "Altiplano",
        reference_code: "TE400",
        price: None,
        created_at: "2024-01-01 09:00:00",
        ..NewListing::default()
    });
    set_setting(&db, "site_name", "Litoral Imóveis");
    set_setting(&db, "whatsapp", "+55 83 98888-7777");

    AppState::load(&db)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
