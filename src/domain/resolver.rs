//! Subdomain resolver backed by certificate transparency logs

use crate::crtsh::endpoint::query_url;
use crate::domain::{DomainValidator, SubdomainSource};
use crate::error::{LookupError, Result};
use crate::types::{CertificateRecord, ResolverConfig, SubdomainSet};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;

/// Resolves subdomains with one crt.sh query per lookup
pub struct SubdomainResolver {
    client: Client,
    base_url: String,
    timeout_secs: Option<u64>,
    validator: DomainValidator,
}

impl SubdomainResolver {
    /// Create a new resolver with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ResolverConfig::default())
    }

    /// Create a new resolver with custom configuration
    pub fn with_config(config: &ResolverConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| LookupError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout.map(|t| t.as_secs()),
            validator: DomainValidator::new(),
        })
    }

    /// Base URL of the search service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch, deduplicate and sort the subdomains recorded for a domain
    pub async fn resolve(&self, domain: &str) -> Result<SubdomainSet> {
        let domain = self.validator.validate(domain)?;
        let url = query_url(&self.base_url, domain);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                domain = %domain,
                status = %status.as_u16(),
                "crt.sh returned a non-success status"
            );
            return Err(LookupError::upstream(status.as_u16(), Some(url)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let records: Vec<CertificateRecord> = serde_json::from_str(&text)
            .map_err(|e| LookupError::parse(e.to_string(), Some(text)))?;

        let record_count = records.len();
        let subdomains = SubdomainSet::from_records(records);

        tracing::debug!(
            domain = %domain,
            records = %record_count,
            count = %subdomains.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Subdomain lookup completed"
        );

        Ok(subdomains)
    }

    fn transport_error(&self, err: reqwest::Error, url: &str) -> LookupError {
        match self.timeout_secs {
            Some(secs) if err.is_timeout() => LookupError::timeout("crt.sh request", secs),
            _ => LookupError::network(err.to_string(), Some(url.to_string())),
        }
    }
}

#[async_trait]
impl SubdomainSource for SubdomainResolver {
    async fn fetch_subdomains(&self, domain: &str) -> Result<SubdomainSet> {
        self.resolve(domain).await
    }

    fn source_name(&self) -> &'static str {
        "crt.sh"
    }
}
