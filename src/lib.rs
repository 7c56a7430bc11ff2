//! Subdomain Lookup - subdomain discovery over certificate transparency logs
//!
//! A small HTTP service that asks crt.sh for the names seen in certificates
//! issued for a domain and serves them as JSON or as an HTML page.

pub mod config;
pub mod crtsh;
pub mod domain;
pub mod error;
pub mod types;
pub mod web;

// Re-export commonly used types
pub use error::{LookupError, Result};
pub use types::{
    CertificateRecord, LookupRequest, LookupResult, ResolverConfig, ServerConfig, SubdomainSet,
};

// Re-export main functionality
pub use domain::{DomainValidator, SubdomainResolver, SubdomainSource};
pub use web::{router, AppState, RequestMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
