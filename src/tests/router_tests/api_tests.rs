use super::{get, seeded_state};
use crate::router::handle;
use crate::tests::utils::body_string;
use serde_json::Value;

fn get_json(uri: &str, name: &str) -> Value {
    let state = seeded_state(name);
    let resp = handle(get(uri), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp.into_body())).expect("invalid JSON")
}

fn titles(json: &Value) -> Vec<String> {
    json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn api_returns_every_listing_in_catalogue_order() {
    let json = get_json("/api/imoveis", "api_all");

    assert_eq!(json["label"], "All");
    assert_eq!(json["used_fallback"], false);
    assert_eq!(json["search_active"], false);
    assert_eq!(
        titles(&json),
        vec!["Casa com piscina", "Apartamento mobiliado", "Flat beira-mar", "Terreno esquina"]
    );
}

#[test]
fn api_flags_fallback_for_search_without_hits() {
    let json = get_json("/api/imoveis?q=xyz123&purpose=rental", "api_fallback");

    assert_eq!(json["used_fallback"], true);
    assert_eq!(json["label"], "Search results");
    assert_eq!(titles(&json), vec!["Casa com piscina", "Flat beira-mar"]);
}

#[test]
fn api_empty_category_is_not_a_fallback() {
    let json = get_json("/api/imoveis?purpose=rental&featured=true", "api_empty");
    assert_eq!(json["used_fallback"], false);
    assert_eq!(titles(&json), vec!["Flat beira-mar"]);

    let json = get_json("/api/imoveis?q=comprar+praia", "api_sale_tokens");
    // "praia" matches nothing for sale, so the featured set comes back.
    assert_eq!(json["used_fallback"], true);
}

#[test]
fn api_search_by_reference_code() {
    let json = get_json("/api/imoveis?q=te400", "api_ref");
    assert_eq!(titles(&json), vec!["Terreno esquina"]);
    assert_eq!(json["listings"][0]["price"], Value::Null);
}
