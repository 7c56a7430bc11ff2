//! Error handling for subdomain-lookup

use thiserror::Error;

/// Generic message used when the upstream answers with a non-success status
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error fetching subdomain data.";

/// Main error type for subdomain-lookup
#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Upstream error ({status}): {}", UPSTREAM_FAILURE_MESSAGE)]
    Upstream {
        status: u16,
        url: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },
}

impl LookupError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an upstream status error
    pub fn upstream(status: u16, url: Option<String>) -> Self {
        Self::Upstream { status, url }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>, url: Option<String>) -> Self {
        Self::Network {
            message: message.into(),
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Text placed in the `details` field of an API error body.
    ///
    /// Status failures stay generic; transport and parse failures expose the
    /// underlying message.
    pub fn details(&self) -> String {
        match self {
            Self::Upstream { .. } => UPSTREAM_FAILURE_MESSAGE.to_string(),
            Self::Config { message }
            | Self::Validation { message }
            | Self::Network { message, .. }
            | Self::Parse { message, .. } => message.clone(),
            Self::Timeout { .. } => self.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LookupError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::LookupError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::LookupError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::LookupError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::LookupError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_details_are_generic() {
        let error = LookupError::upstream(503, Some("https://crt.sh/".to_string()));
        assert_eq!(error.details(), UPSTREAM_FAILURE_MESSAGE);
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn test_transport_details_keep_message() {
        let error = LookupError::network("connection refused", None);
        assert_eq!(error.details(), "connection refused");

        let error = LookupError::parse(
            "expected value at line 1 column 1",
            Some("<html>".to_string()),
        );
        assert_eq!(error.details(), "expected value at line 1 column 1");
    }

    #[test]
    fn test_timeout_details() {
        let error = LookupError::timeout("crt.sh request", 5);
        assert_eq!(error.details(), "Timeout error: crt.sh request timed out after 5s");
    }

    #[test]
    fn test_error_macros() {
        let error = validation_error!("bad domain: {}", "nope");
        assert!(matches!(error, LookupError::Validation { .. }));
        assert!(error.to_string().contains("bad domain: nope"));

        let error = config_error!("missing value");
        assert_eq!(error.to_string(), "Configuration error: missing value");
    }
}
