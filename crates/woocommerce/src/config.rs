//! WooCommerce adapter configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WOOCOMMERCE_CONSUMER_KEY` - REST API consumer key
//! - `WOOCOMMERCE_CONSUMER_SECRET` - REST API consumer secret
//!
//! ## Optional
//! - `WOOCOMMERCE_URL` - Store base URL (default: `http://localhost:8080`)

use secrecy::SecretString;

use ventabot_core::CommerceError;

/// Fallback store host when `WOOCOMMERCE_URL` is unset.
pub const DEFAULT_STORE_URL: &str = "http://localhost:8080";

/// WooCommerce adapter configuration.
///
/// Implements `Debug` manually to redact the consumer secret.
#[derive(Clone)]
pub struct WooConfig {
    /// Store base URL; the adapter appends the `wp-json/wc/v3` API root.
    pub store_url: String,
    /// REST API consumer key.
    pub consumer_key: String,
    /// REST API consumer secret.
    pub consumer_secret: SecretString,
}

impl std::fmt::Debug for WooConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WooConfig")
            .field("store_url", &self.store_url)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

impl WooConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Configuration`] when a required credential
    /// variable is missing — without the key pair every call would be
    /// rejected upstream, so the configuration is unusable.
    pub fn from_env() -> Result<Self, CommerceError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            store_url: std::env::var("WOOCOMMERCE_URL")
                .unwrap_or_else(|_| DEFAULT_STORE_URL.to_string()),
            consumer_key: required_env("WOOCOMMERCE_CONSUMER_KEY")?,
            consumer_secret: SecretString::from(required_env("WOOCOMMERCE_CONSUMER_SECRET")?),
        })
    }
}

fn required_env(key: &str) -> Result<String, CommerceError> {
    std::env::var(key)
        .map_err(|_| CommerceError::Configuration(format!("missing environment variable: {key}")))
}
