//! HTTP fetcher implementation
//!
//! This module handles every HTTP request the harvester makes:
//! - Building the HTTP client with user agent and timeouts
//! - Single-attempt GET requests returning the response body
//! - Collapsing network, status and timeout errors into one failure

use crate::config::HttpConfig;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Source of raw documents
///
/// Implemented by [`HttpFetcher`] for real runs and by stubs in tests.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetches `url` and returns the response body
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The body of a 2xx response
    /// * `Err(HarvestError::FetchFailed)` - Network error, timeout or non-2xx status
    async fn fetch(&self, url: &str) -> Result<String, HarvestError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration
    pub fn from_config(config: &HttpConfig) -> Result<Self, HarvestError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, HarvestError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_failed(url, classify_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_failed(
                url,
                format!("HTTP status {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_failed(url, classify_error(&e)))?;

        tracing::debug!(%url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}

fn fetch_failed(url: &str, reason: String) -> HarvestError {
    HarvestError::FetchFailed {
        url: url.to_string(),
        reason,
    }
}

/// Turns a reqwest error into a short human-readable reason
fn classify_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "connection refused".to_string()
    } else {
        e.to_string()
    }
}
