//! Server configuration loaded from the environment

use crate::config_error;
use crate::error::Result;
use crate::types::ServerConfig;
use std::net::SocketAddr;
use std::time::Duration;

/// Address the server listens on
pub const BIND_ENV: &str = "SUBLOOKUP_BIND";
/// Base URL of the certificate transparency search service
pub const UPSTREAM_URL_ENV: &str = "SUBLOOKUP_UPSTREAM_URL";
/// Optional upstream request timeout, in seconds
pub const UPSTREAM_TIMEOUT_ENV: &str = "SUBLOOKUP_UPSTREAM_TIMEOUT_SECS";

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bind) = non_empty(lookup(BIND_ENV)) {
            config.bind_addr = bind.parse::<SocketAddr>().map_err(|e| {
                config_error!("{} '{}' is not a socket address: {}", BIND_ENV, bind, e)
            })?;
        }

        if let Some(url) = non_empty(lookup(UPSTREAM_URL_ENV)) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(config_error!(
                    "{} must be an http(s) URL, got '{}'",
                    UPSTREAM_URL_ENV,
                    url
                ));
            }
            config.resolver.base_url = url;
        }

        if let Some(secs) = non_empty(lookup(UPSTREAM_TIMEOUT_ENV)) {
            let secs: u64 = secs.parse().map_err(|_| {
                config_error!(
                    "{} must be a whole number of seconds, got '{}'",
                    UPSTREAM_TIMEOUT_ENV,
                    secs
                )
            })?;
            if secs == 0 {
                return Err(config_error!("{} must be greater than zero", UPSTREAM_TIMEOUT_ENV));
            }
            config.resolver.timeout = Some(Duration::from_secs(secs));
        }

        tracing::debug!(
            bind_addr = %config.bind_addr,
            upstream = %config.resolver.base_url,
            timeout = ?config.resolver.timeout,
            "Configuration loaded"
        );

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(config.resolver.base_url, "https://crt.sh/");
        assert!(config.resolver.timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (BIND_ENV, "0.0.0.0:9000"),
            (UPSTREAM_URL_ENV, "http://127.0.0.1:8080/"),
            (UPSTREAM_TIMEOUT_ENV, "15"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.resolver.base_url, "http://127.0.0.1:8080/");
        assert_eq!(config.resolver.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = load(&[(BIND_ENV, "  "), (UPSTREAM_TIMEOUT_ENV, "")]).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert!(config.resolver.timeout.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[(BIND_ENV, "nowhere")]).is_err());
        assert!(load(&[(UPSTREAM_URL_ENV, "ftp://crt.sh/")]).is_err());
        assert!(load(&[(UPSTREAM_TIMEOUT_ENV, "soon")]).is_err());
        assert!(load(&[(UPSTREAM_TIMEOUT_ENV, "0")]).is_err());
    }
}
