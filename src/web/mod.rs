//! HTTP surface: request routing and page rendering

pub mod handlers;
pub mod page;

use crate::domain::{DomainValidator, SubdomainResolver, SubdomainSource};
use crate::error::Result;
use crate::types::{LookupRequest, ResolverConfig};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path of the HTML lookup page
pub const LOOKUP_PATH: &str = "/lookup";

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn SubdomainSource>,
}

impl AppState {
    /// Create state around any subdomain source
    pub fn new(source: Arc<dyn SubdomainSource>) -> Self {
        Self { source }
    }

    /// Create state backed by a crt.sh resolver
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let resolver = SubdomainResolver::with_config(config)?;
        Ok(Self::new(Arc::new(resolver)))
    }

    pub fn source(&self) -> &dyn SubdomainSource {
        self.source.as_ref()
    }
}

/// How an inbound request is served
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    /// Path is itself a domain: answer with JSON
    ApiLookup { domain: String },
    /// `/lookup?domain=...`: answer with an HTML result page
    UiLookup(LookupRequest),
    /// Anything else: empty search form
    Home,
}

impl RequestMode {
    /// Select the mode for a request path and its parsed `domain` query
    pub fn classify(path: &str, query: Option<LookupRequest>) -> Self {
        let candidate = path.strip_prefix('/').unwrap_or(path);

        if DomainValidator::new().is_match(candidate) {
            return Self::ApiLookup {
                domain: candidate.to_string(),
            };
        }

        match query {
            Some(request) if path == LOOKUP_PATH => Self::UiLookup(request),
            _ => Self::Home,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
