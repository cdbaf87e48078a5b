use super::{get, seeded_state};
use crate::router::{handle, respond};
use crate::templates::components::results::{EMPTY_CATEGORY, NO_EXACT_MATCH};
use crate::tests::utils::body_string;

#[test]
fn home_lists_every_active_listing() {
    let state = seeded_state("home_all");

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp.into_body());
    assert!(body.contains("Litoral Imóveis"));
    for id in 1..=4 {
        assert!(body.contains(&format!("/imoveis/{id}\"")), "listing {id} missing");
    }
    assert!(body.contains("delay:300ms"));
    assert!(body.contains("On request"));
}

#[test]
fn rental_intent_in_query_overrides_sale_badge() {
    let state = seeded_state("home_intent");

    let resp = handle(get("/?q=quero+alugar&purpose=sale"), &state).expect("Handler failed");
    let body = body_string(resp.into_body());

    assert!(body.contains("Search results"));
    assert!(body.contains("Apartamento mobiliado"));
    assert!(body.contains("Flat beira-mar"));
    assert!(!body.contains("Casa com piscina"));
    assert!(!body.contains("Terreno esquina"));
}

#[test]
fn search_fragment_falls_back_to_featured() {
    let state = seeded_state("fragment_fallback");

    let resp = handle(get("/imoveis/search?q=xyz123"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp.into_body());
    assert!(body.starts_with("<section id=\"results\""));
    assert!(body.contains(NO_EXACT_MATCH));
    assert!(body.contains("Casa com piscina"));
    assert!(body.contains("Flat beira-mar"));
    assert!(!body.contains("Apartamento mobiliado"));
}

#[test]
fn featured_toggle_without_search_never_falls_back() {
    let state = seeded_state("fragment_featured");

    let resp = handle(get("/imoveis/search?purpose=sale&featured=1"), &state).expect("Handler failed");
    let body = body_string(resp.into_body());
    assert!(body.contains("For sale · Featured"));
    assert!(body.contains("Casa com piscina"));
    assert!(!body.contains(NO_EXACT_MATCH));
    assert!(!body.contains(EMPTY_CATEGORY));
}

#[test]
fn accent_insensitive_token_match() {
    let state = seeded_state("fragment_accents");

    let resp = handle(get("/imoveis/search?q=MANAIRA"), &state).expect("Handler failed");
    let body = body_string(resp.into_body());
    assert!(body.contains("Apartamento mobiliado"));
    assert!(!body.contains(NO_EXACT_MATCH));
}

#[test]
fn unknown_purpose_is_rejected() {
    let state = seeded_state("home_bad_purpose");

    let err = handle(get("/?purpose=timeshare"), &state).err().expect("expected an error");
    assert_eq!(err.status(), 400);
}

#[test]
fn unknown_route_is_not_found() {
    let state = seeded_state("not_found");

    let err = handle(get("/admin"), &state).err().expect("expected an error");
    assert_eq!(err.status(), 404);
}

#[test]
fn server_entry_point_renders_pages_and_error_pages() {
    let state = seeded_state("respond_pages");

    let ok = respond(get("/?q=bessa"), &state);
    assert_eq!(ok.status(), 200);
    assert!(body_string(ok.into_body()).contains("Casa com piscina"));

    let missing = respond(get("/admin"), &state);
    assert_eq!(missing.status(), 404);
    assert!(body_string(missing.into_body()).contains("Error 404"));

    let bad = respond(get("/imoveis/search?purpose=timeshare"), &state);
    assert_eq!(bad.status(), 400);
    assert!(body_string(bad.into_body()).contains("unknown purpose: timeshare"));
}
