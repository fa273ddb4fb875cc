//! Medusa adapter configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MEDUSA_BACKEND_URL` - Backend base URL (default: `http://localhost:9000`)
//! - `MEDUSA_ADMIN_TOKEN` - Admin API bearer token; presence gates order and
//!   customer operations

use secrecy::SecretString;

/// Fallback backend host when `MEDUSA_BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";

/// Medusa adapter configuration.
///
/// Implements `Debug` manually to redact the admin token.
#[derive(Clone)]
pub struct MedusaConfig {
    /// Backend base URL, storefront and admin APIs alike.
    pub backend_url: String,
    /// Admin API bearer token. Optional: without it the adapter serves
    /// catalog lookups only.
    pub admin_token: Option<SecretString>,
}

impl std::fmt::Debug for MedusaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedusaConfig")
            .field("backend_url", &self.backend_url)
            .field(
                "admin_token",
                &self.admin_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for MedusaConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            admin_token: None,
        }
    }
}

impl MedusaConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` if present. Never fails:
    /// the backend URL has a default and the admin token is optional — a
    /// malformed token only surfaces when the admin handle is first built.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            backend_url: std::env::var("MEDUSA_BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            admin_token: std::env::var("MEDUSA_ADMIN_TOKEN")
                .ok()
                .filter(|token| !token.is_empty())
                .map(SecretString::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_admin_token() {
        let config = MedusaConfig {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            admin_token: Some(SecretString::from("sk_live_very_secret")),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk_live_very_secret"));
    }

    #[test]
    fn test_default_has_no_admin_token() {
        let config = MedusaConfig::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert!(config.admin_token.is_none());
    }
}
