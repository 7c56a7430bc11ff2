//! Core types and structures for subdomain-lookup

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::time::Duration;

use crate::crtsh::endpoint::DEFAULT_BASE_URL;

/// Raw lookup input, unvalidated until checked against the domain pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub domain: String,
}

impl LookupRequest {
    /// Build a request from decoded query pairs.
    ///
    /// Present means present: an empty `domain=` still yields a request, and
    /// when the key repeats the first value wins.
    pub fn from_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Option<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .find(|(key, _)| K::as_ref(key) == "domain")
            .map(|(_, value)| Self {
                domain: value.into(),
            })
    }
}

/// One record returned by the certificate transparency search service
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateRecord {
    pub name_value: String,
}

/// Deduplicated, lexicographically sorted subdomain names for one lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubdomainSet(Vec<String>);

impl SubdomainSet {
    /// Build a set from raw names, dropping exact duplicates and sorting by code point
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self(unique.into_iter().collect())
    }

    /// Build a set from upstream certificate records
    pub fn from_records(records: Vec<CertificateRecord>) -> Self {
        Self::from_names(records.into_iter().map(|record| record.name_value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SubdomainSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// API response body: either the found subdomains or an error description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Found {
        domain: String,
        subdomains: Vec<String>,
    },
    Failed {
        error: String,
        details: String,
    },
}

impl LookupResult {
    pub fn found(domain: impl Into<String>, subdomains: SubdomainSet) -> Self {
        Self::Found {
            domain: domain.into(),
            subdomains: subdomains.into_vec(),
        }
    }

    pub fn failed(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
            details: details.into(),
        }
    }
}

/// Configuration for the outbound subdomain resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Base URL of the search service, ending with `/`
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("subdomain-lookup/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub resolver: ResolverConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            resolver: ResolverConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_set_dedup_and_sort() {
        let set = SubdomainSet::from_names(["z.example.com", "a.example.com", "z.example.com"]);
        assert_eq!(set.as_slice(), ["a.example.com", "z.example.com"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_subdomain_set_is_case_sensitive() {
        let set = SubdomainSet::from_names(["WWW.example.com", "www.example.com"]);
        assert_eq!(set.as_slice(), ["WWW.example.com", "www.example.com"]);
    }

    #[test]
    fn test_lookup_request_from_query_pairs() {
        let pairs = [("domain", "example.com"), ("domain", "other.com")];
        assert_eq!(
            LookupRequest::from_query_pairs(pairs),
            Some(LookupRequest {
                domain: "example.com".to_string()
            })
        );

        let pairs = [("q", "x"), ("domain", "")];
        assert_eq!(LookupRequest::from_query_pairs(pairs).unwrap().domain, "");

        assert_eq!(LookupRequest::from_query_pairs([("dom", "example.com")]), None);
        assert_eq!(LookupRequest::from_query_pairs(Vec::<(String, String)>::new()), None);
    }

    #[test]
    fn test_lookup_result_shapes() {
        let subdomains = SubdomainSet::from_names(["www.example.com"]);
        let found = LookupResult::found("example.com", subdomains);
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            serde_json::json!({"domain": "example.com", "subdomains": ["www.example.com"]})
        );

        let failed = LookupResult::failed("Unable to fetch subdomain data.", "boom");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"error": "Unable to fetch subdomain data.", "details": "boom"})
        );
    }

    #[test]
    fn test_record_ignores_extra_fields() {
        let records: Vec<CertificateRecord> = serde_json::from_str(
            r#"[{"issuer_ca_id": 1, "name_value": "www.example.com", "id": 42}]"#,
        )
        .unwrap();
        assert_eq!(records[0].name_value, "www.example.com");
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8787);
        assert!(config.resolver.timeout.is_none());
        assert!(config.resolver.base_url.ends_with('/'));
    }
}
