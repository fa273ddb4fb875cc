//! Error kinds shared by every commerce adapter.

use thiserror::Error;

/// Errors surfaced by commerce adapter operations.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// Configuration is unusable (missing required variable, malformed URL
    /// or credential). Surfaced immediately, never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A privileged operation was attempted without admin credentials.
    /// Raised before any network call is made.
    #[error("operation '{0}' requires admin credentials")]
    Authorization(&'static str),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("upstream returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The requested resource does not exist upstream.
    ///
    /// Single-entity lookups convert this into an `Ok(None)` result; it only
    /// escapes for list endpoints, where a 404 is a real failure.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CommerceError {
    /// Whether this error is the upstream's way of saying "no such resource".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_display() {
        let err = CommerceError::Authorization("get_order");
        assert_eq!(
            err.to_string(),
            "operation 'get_order' requires admin credentials"
        );
    }

    #[test]
    fn test_api_display() {
        let err = CommerceError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "upstream returned 503: maintenance");
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(CommerceError::NotFound("orders/9".to_string()).is_not_found());
        assert!(!CommerceError::Configuration("bad url".to_string()).is_not_found());
    }
}
