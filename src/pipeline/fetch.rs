//! Outbound HTTP for dynamic badges.
//!
//! One GET per request, bounded by the client timeout. No retries and no
//! response caching.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{BadgeError, Result};

/// Default outbound request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// User-Agent sent when none is configured.
pub fn default_user_agent() -> String {
    format!("badgeserv/{}", env!("CARGO_PKG_VERSION"))
}

/// A successful upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Source of upstream documents.
pub trait Fetcher: Send + Sync {
    /// Fetch `url` with a single GET.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamFetch` on transport failure, timeout, or a
    /// non-success status.
    fn get(&self, url: &str) -> Result<FetchResponse>;
}

/// Fetches targets over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout and User-Agent.
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_TIMEOUT, default_user_agent())
    }

    /// Create a fetcher with a custom timeout and User-Agent.
    pub fn with_options(timeout: Duration, user_agent: impl Into<String>) -> Result<Self> {
        let user_agent = user_agent.into();
        let client = Client::builder()
            .user_agent(user_agent.clone())
            .timeout(timeout)
            .build()
            .map_err(|e| BadgeError::Other(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout,
            user_agent,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the configured User-Agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        let fetch_error = |message: String| BadgeError::UpstreamFetch {
            url: url.to_string(),
            message,
        };

        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;
        tracing::debug!("Fetched {} ({} bytes, HTTP {})", url, body.len(), status.as_u16());

        Ok(FetchResponse {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}
