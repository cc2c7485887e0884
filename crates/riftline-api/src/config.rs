//! Configuration structures for API clients

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ApiError, Result};
use crate::region::Region;
use crate::retry::RetryPolicy;

const DEFAULT_USER_AGENT: &str = concat!("riftline-api/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as the `X-Riot-Token` header
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Platform the requests are routed to
    pub region: Region,

    /// Replaces the regional host when set (proxies, test servers)
    pub base_url: Option<String>,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Request timeout
    pub request_timeout: Duration,

    /// User agent sent with every request
    pub user_agent: String,

    /// Retry policy for rate-limited and unavailable responses
    pub retry_policy: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: Region::default(),
            base_url: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, region: Region) -> Self {
        Self {
            api_key: api_key.into(),
            region,
            ..Self::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// `RIFTLINE_API_KEY` is required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("RIFTLINE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ApiError::MissingApiKey)?;

        let region = match std::env::var("RIFTLINE_REGION") {
            Ok(value) => value.parse()?,
            Err(_) => Region::default(),
        };

        Ok(Self {
            api_key,
            region,
            base_url: std::env::var("RIFTLINE_BASE_URL").ok(),
            retry_policy: RetryPolicy::from_env()?,
            ..Self::default()
        }
        .with_timeouts_from_env())
    }

    /// Apply `RIFTLINE_CONNECT_TIMEOUT` and `RIFTLINE_REQUEST_TIMEOUT` (seconds)
    /// when set; unparsable values leave the current timeouts in place.
    #[must_use]
    pub fn with_timeouts_from_env(mut self) -> Self {
        if let Some(secs) = env_secs("RIFTLINE_CONNECT_TIMEOUT") {
            self.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_secs("RIFTLINE_REQUEST_TIMEOUT") {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Base URL requests are resolved against.
    pub fn endpoint_base(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.region.base_url())
    }
}

fn env_secs(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
#[allow(unsafe_code, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("KEY", Region::NA1);
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("riftline-api/"));
        assert_eq!(config.endpoint_base(), "https://na1.api.riotgames.com");
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::new("KEY", Region::KR).with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.endpoint_base(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig::new("RGAPI-secret", Region::EUW1);
        let debug = format!("{config:?}");
        assert!(!debug.contains("RGAPI-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_serialize_skips_key() {
        let config = ClientConfig::new("RGAPI-secret", Region::EUN1);
        let json = serde_json::to_string(&config).expect("Operation should succeed");
        assert!(!json.contains("RGAPI-secret"));
        assert!(json.contains("\"region\":\"eun1\""));
    }

    #[test]
    fn test_from_env() {
        unsafe {
            std::env::remove_var("RIFTLINE_API_KEY");
        }
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ApiError::MissingApiKey)
        ));

        unsafe {
            std::env::set_var("RIFTLINE_API_KEY", "RGAPI-env");
            std::env::set_var("RIFTLINE_REGION", "kr");
            std::env::set_var("RIFTLINE_REQUEST_TIMEOUT", "5");
        }
        let config = ClientConfig::from_env().expect("Operation should succeed");
        assert_eq!(config.api_key, "RGAPI-env");
        assert_eq!(config.region, Region::KR);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));

        unsafe {
            std::env::set_var("RIFTLINE_REGION", "atlantis");
        }
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ApiError::InvalidRegion(_))
        ));

        for var in [
            "RIFTLINE_API_KEY",
            "RIFTLINE_REGION",
            "RIFTLINE_REQUEST_TIMEOUT",
        ] {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}
