//! Request handlers for the three response modes

use super::{page, AppState, RequestMode};
use crate::domain::DomainValidator;
use crate::types::{LookupRequest, LookupResult};
use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use std::time::Instant;

/// `error` field of every API failure body
pub const API_ERROR_MESSAGE: &str = "Unable to fetch subdomain data.";
/// Body of the HTML lookup's 400 response
pub const INVALID_DOMAIN_MESSAGE: &str = "Invalid domain name.";
/// Body of the HTML lookup's 500 response
pub const RETRIEVAL_ERROR_MESSAGE: &str = "Error retrieving data.";

/// Single entry point: classify the request and serve the selected mode
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        tracing::debug!(method = %method, path = %uri.path(), "Rejected method");
        return method_not_allowed();
    }

    match RequestMode::classify(uri.path(), LookupRequest::from_query_pairs(params)) {
        RequestMode::ApiLookup { domain } => api_lookup(&state, domain).await,
        RequestMode::UiLookup(request) => ui_lookup(&state, request).await,
        RequestMode::Home => home(),
    }
}

/// JSON lookup for a domain taken from the path
pub async fn api_lookup(state: &AppState, domain: String) -> Response {
    let start_time = Instant::now();

    match state.source().fetch_subdomains(&domain).await {
        Ok(subdomains) => {
            tracing::info!(
                domain = %domain,
                count = %subdomains.len(),
                duration_ms = %start_time.elapsed().as_millis(),
                "API lookup served"
            );
            json_response(&LookupResult::found(domain, subdomains))
        }
        Err(e) => {
            tracing::warn!(domain = %domain, error = %e, "API lookup failed");
            json_response(&LookupResult::failed(API_ERROR_MESSAGE, e.details()))
        }
    }
}

/// HTML lookup for `/lookup?domain=...`
pub async fn ui_lookup(state: &AppState, request: LookupRequest) -> Response {
    if let Err(e) = DomainValidator::new().validate(&request.domain) {
        tracing::debug!(error = %e, "UI lookup rejected");
        return (StatusCode::BAD_REQUEST, INVALID_DOMAIN_MESSAGE).into_response();
    }

    match state.source().fetch_subdomains(&request.domain).await {
        Ok(subdomains) => {
            tracing::info!(
                domain = %request.domain,
                count = %subdomains.len(),
                "UI lookup served"
            );
            Html(page::results_page(&subdomains)).into_response()
        }
        Err(e) => {
            tracing::warn!(domain = %request.domain, error = %e, "UI lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, RETRIEVAL_ERROR_MESSAGE).into_response()
        }
    }
}

/// Home page with the empty search form
pub fn home() -> Response {
    Html(page::home_page()).into_response()
}

/// Pretty-printed JSON body with two-space indentation
fn json_response(result: &LookupResult) -> Response {
    match serde_json::to_string_pretty(result) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize lookup result");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response()
}
