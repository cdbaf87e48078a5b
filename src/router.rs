use crate::app::AppState;
use crate::domain::Purpose;
use crate::errors::ServerError;
use crate::responses::{error_to_response, html_response, json_response, ResultResp};
use crate::search::{SearchConfig, SearchSession};
use crate::templates::{self, pages::HomeVm};
use astra::{Request, Response};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Server entry point: dispatch, log the outcome, and turn errors into
/// HTML error pages.
pub fn respond(req: Request, state: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match handle(req, state) {
        Ok(resp) => {
            info!(%method, %path, status = resp.status().as_u16(), "request");
            resp
        }
        Err(err) => {
            let status = err.status();
            if status >= 500 {
                error!(%method, %path, status, error = %err, "request failed");
            } else {
                warn!(%method, %path, status, error = %err, "request rejected");
            }
            error_to_response(err)
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = SearchParams::from_request(&req)?;
            let session = params.session(state);
            let view = session.results();
            html_response(templates::pages::home_page(&HomeVm {
                settings: &state.settings,
                query: &params.q,
                criteria: session.criteria(),
                view: &view,
                debounce: SearchConfig::default().debounce,
            }))
        }
        ("GET", "/imoveis/search") => {
            let params = SearchParams::from_request(&req)?;
            let session = params.session(state);
            html_response(templates::results_section(&session.results()))
        }
        ("GET", "/api/imoveis") => {
            let params = SearchParams::from_request(&req)?;
            let session = params.session(state);
            json_response(&session.results())
        }
        ("GET", p) if p.starts_with("/imoveis/") => {
            let id: i64 = p["/imoveis/".len()..]
                .trim_end_matches('/')
                .parse()
                .map_err(|_| ServerError::BadRequest("invalid listing id".into()))?;

            let listing = state
                .listings
                .iter()
                .find(|l| l.id == id)
                .ok_or(ServerError::NotFound)?;

            html_response(templates::pages::listing_page(listing, &state.settings))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Query-string inputs shared by the search routes.
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub q: String,
    pub purpose: Option<Purpose>,
    pub featured: bool,
}

impl SearchParams {
    pub fn from_request(req: &Request) -> Result<Self, ServerError> {
        Self::parse(req.uri().query().unwrap_or(""))
    }

    pub fn parse(query: &str) -> Result<Self, ServerError> {
        let mut params = SearchParams::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => params.q = value.into_owned(),
                "purpose" => {
                    params.purpose = match value.as_ref() {
                        "" | "all" => None,
                        other => Some(Purpose::parse(other).ok_or_else(|| {
                            ServerError::BadRequest(format!("unknown purpose: {other}"))
                        })?),
                    }
                }
                "featured" => {
                    params.featured = matches!(value.as_ref(), "1" | "true" | "on");
                }
                _ => {}
            }
        }

        Ok(params)
    }

    /// Request-scoped session over the shared catalogue.
    pub fn session(&self, state: &AppState) -> SearchSession {
        let mut session = SearchSession::new(Arc::clone(&state.listings));
        session.set_query(&self.q);
        session.set_badge(self.purpose);
        session.set_featured_only(self.featured);
        session
    }
}
