//! HTTP transport for API requests
//!
//! Owns the `reqwest` client, attaches the authentication header to every
//! request, maps response statuses onto [`ApiError`] and decodes JSON bodies.
//! Each request runs inside the configured [`RetryPolicy`].

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::retry::RetryPolicy;

/// Header carrying the API key.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-riot-token");

static CRYPTO_PROVIDER: OnceLock<()> = OnceLock::new();

/// Install the ring provider for rustls once per process.
pub(crate) fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.get_or_init(|| {
        // Err means another provider is already installed, which is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Authenticated JSON-over-HTTP transport bound to one endpoint base.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    retry_policy: RetryPolicy,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        ensure_crypto_provider();

        let mut token =
            HeaderValue::from_str(&config.api_key).map_err(|_| ApiError::InvalidApiKey)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .gzip(true)
            .build()?;

        let base_url = Url::parse(&config.endpoint_base())?;

        Ok(Self {
            client,
            base_url,
            retry_policy: config.retry_policy.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request URL from path segments and query pairs.
    ///
    /// Segments are percent-encoded individually, so ids containing `/` or
    /// spaces stay inside their segment.
    pub fn endpoint_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET a JSON document, retrying per the configured policy.
    pub async fn get_json<T>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(segments, query)?;
        self.retry_policy.execute(|| self.get_once(&url)).await
    }

    async fn get_once<T>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("API request URL: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            if body.is_empty() {
                return Err(ApiError::EmptyResponse(status.as_u16()));
            }
            return serde_json::from_slice(&body).map_err(ApiError::from);
        }

        let retry_after = parse_retry_after(response.headers());
        tracing::debug!("API request to {} failed with status {}", url.path(), status);
        Err(ApiError::from_status(status, retry_after))
    }
}

/// Retry-After as whole seconds; HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
