use super::{get, seeded_state};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::body_string;

#[test]
fn detail_page_shows_listing_and_contact_link() {
    let state = seeded_state("detail_ok");
    let id = state
        .listings
        .iter()
        .find(|l| l.reference_code == "AP200")
        .map(|l| l.id)
        .unwrap();

    let resp = handle(get(&format!("/imoveis/{id}")), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp.into_body());
    assert!(body.contains("Apartamento mobiliado"));
    assert!(body.contains("R$ 2.800/month"));
    assert!(body.contains("For rent"));
    assert!(body.contains("https://wa.me/5583988887777?text="));
}

#[test]
fn missing_listing_is_not_found() {
    let state = seeded_state("detail_missing");

    let err = handle(get("/imoveis/9999"), &state).err().expect("expected an error");
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn non_numeric_id_is_bad_request() {
    let state = seeded_state("detail_bad_id");

    let err = handle(get("/imoveis/casa-bessa"), &state).err().expect("expected an error");
    assert!(matches!(err, ServerError::BadRequest(_)));
}
