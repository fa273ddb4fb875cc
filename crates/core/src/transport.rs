//! HTTP boundary used by the adapters.
//!
//! Adapters speak to their backend through the [`Transport`] trait: one GET
//! per operation, JSON out. The production implementation is
//! [`HttpTransport`] over `reqwest`; tests substitute a recording fake so
//! they can assert call counts, paths, and query parameters.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::CommerceError;

/// Retries for transient network failures. Fixed; not caller-configurable.
pub const MAX_RETRIES: u32 = 3;

/// How much of an upstream error body is kept in the error message.
const ERROR_BODY_LIMIT: usize = 200;

/// One outbound GET against a backend resource.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET for `path` (relative to the base URL) with `query`
    /// parameters appended, returning the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::NotFound`] for an upstream 404,
    /// [`CommerceError::Api`] for other non-success statuses, and
    /// [`CommerceError::Http`] / [`CommerceError::Parse`] for network and
    /// decoding failures.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, CommerceError>;
}

/// `reqwest`-backed [`Transport`] with a fixed base URL, default headers,
/// and query parameters baked in at construction.
///
/// The client handles connection pooling; auth travels either as a default
/// header (bearer tokens) or as base query parameters (consumer key/secret),
/// chosen by the adapter that builds the transport.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    base_query: Vec<(String, String)>,
}

impl HttpTransport {
    /// Build a transport rooted at `base_url`.
    ///
    /// `headers` are sent on every request; `base_query` parameters are
    /// appended to every request ahead of per-call parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Configuration`] when `base_url` does not
    /// parse, and [`CommerceError::Http`] if the client fails to build.
    pub fn new(
        base_url: &str,
        headers: reqwest::header::HeaderMap,
        base_query: Vec<(String, String)>,
    ) -> Result<Self, CommerceError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            CommerceError::Configuration(format!("invalid base URL '{base_url}': {e}"))
        })?;

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url,
            base_query,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CommerceError> {
        self.base_url.join(path).map_err(|e| {
            CommerceError::Configuration(format!("invalid request path '{path}': {e}"))
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, CommerceError> {
        let url = self.endpoint(path)?;

        let mut attempt = 0;
        let response = loop {
            let request = self
                .client
                .get(url.clone())
                .query(&self.base_query)
                .query(query);

            match request.send().await {
                Ok(response) => break response,
                Err(err) if attempt < MAX_RETRIES && (err.is_connect() || err.is_timeout()) => {
                    attempt += 1;
                    tracing::debug!(error = %err, attempt, "transient transport error, retrying");
                    tokio::time::sleep(Duration::from_millis(u64::from(attempt) * 200)).await;
                }
                Err(err) => return Err(err.into()),
            }
        };

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CommerceError::NotFound(path.to_string()));
        }

        // Read as text first so parse failures can log the offending payload.
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(ERROR_BODY_LIMIT).collect::<String>(),
                "backend returned non-success status"
            );
            return Err(CommerceError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    body = %body.chars().take(ERROR_BODY_LIMIT).collect::<String>(),
                    "failed to parse backend response"
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_base_url() {
        let result = HttpTransport::new("not a url", reqwest::header::HeaderMap::new(), vec![]);
        assert!(matches!(result, Err(CommerceError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_joins_relative_paths() {
        let transport = HttpTransport::new(
            "https://shop.example.com/wp-json/wc/v3/",
            reqwest::header::HeaderMap::new(),
            vec![],
        )
        .expect("transport should build");

        let url = transport.endpoint("products/42").expect("path should join");
        assert_eq!(
            url.as_str(),
            "https://shop.example.com/wp-json/wc/v3/products/42"
        );
    }

    #[test]
    fn test_endpoint_from_bare_host() {
        let transport = HttpTransport::new(
            "http://localhost:9000",
            reqwest::header::HeaderMap::new(),
            vec![],
        )
        .expect("transport should build");

        let url = transport
            .endpoint("store/products")
            .expect("path should join");
        assert_eq!(url.as_str(), "http://localhost:9000/store/products");
    }
}
