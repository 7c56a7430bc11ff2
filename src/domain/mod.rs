//! Subdomain discovery module

pub mod resolver;
pub mod validator;

// Re-export main functionality
pub use resolver::SubdomainResolver;
pub use validator::DomainValidator;

use crate::error::Result;
use crate::types::SubdomainSet;
use async_trait::async_trait;

/// Trait for sources of known subdomains
#[async_trait]
pub trait SubdomainSource: Send + Sync {
    /// Look up the subdomains known for a domain
    async fn fetch_subdomains(&self, domain: &str) -> Result<SubdomainSet>;

    /// Get the source name
    fn source_name(&self) -> &'static str;
}
