//! Error types for the NetSuite REST client
//!
//! All fallible public APIs return `Result<T, Error>` where Error is defined
//! here. Paginated fetchers never fail as a whole: they return what they
//! collected and record the reason they stopped.

use thiserror::Error;
use tracing::debug;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Stopped after {max_pages} pages (max_pages reached)")]
    PageLimitReached { max_pages: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the vendor answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error came from the network layer rather than the vendor
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(e) if e.status().is_none())
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

/// Opt-in "log and degrade" policy
///
/// Turns an error into `None`, for callers that prefer a sentinel over
/// branching on the error. The failing operation has already logged it at
/// `warn`, so this only traces it at `debug`.
pub trait Degrade<T> {
    /// Log the error (if any) and discard it
    fn degrade(self) -> Option<T>;
}

impl<T> Degrade<T> for Result<T> {
    fn degrade(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Degraded to None: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("account_id");
        assert_eq!(err.to_string(), "Missing required config field: account_id");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::PageLimitReached { max_pages: 3 };
        assert_eq!(err.to_string(), "Stopped after 3 pages (max_pages reached)");
    }

    #[test]
    fn test_status_classification() {
        assert!(Error::http_status(404, "").is_not_found());
        assert!(!Error::http_status(500, "").is_not_found());
        assert_eq!(Error::http_status(503, "").status(), Some(503));
        assert_eq!(Error::config("x").status(), None);
        assert!(!Error::http_status(500, "").is_transport());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_degrade() {
        let ok: Result<u32> = Ok(7);
        assert_eq!(ok.degrade(), Some(7));

        let err: Result<u32> = Err(Error::http_status(500, "boom"));
        assert_eq!(err.degrade(), None);
    }
}
