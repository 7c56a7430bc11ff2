//! Domain name validation utilities

use crate::error::Result;
use crate::validation_error;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters `[A-Za-z0-9.-]`, then a dot and a top-level label of at least two letters.
pub const DOMAIN_PATTERN: &str = r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static DOMAIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DOMAIN_PATTERN).expect("domain pattern is a valid regex"));

/// Domain name validator
///
/// Matching is exact: no trimming and no case folding, so what passes is
/// exactly what gets queried upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainValidator;

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Self {
        Self
    }

    /// Check a candidate against the domain pattern
    pub fn is_match(&self, candidate: &str) -> bool {
        DOMAIN_REGEX.is_match(candidate)
    }

    /// Validate a domain name, returning it unchanged on success
    pub fn validate<'a>(&self, candidate: &'a str) -> Result<&'a str> {
        if candidate.is_empty() {
            return Err(validation_error!("Domain name cannot be empty"));
        }

        if !self.is_match(candidate) {
            return Err(validation_error!("'{}' is not a valid domain name", candidate));
        }

        Ok(candidate)
    }
}
