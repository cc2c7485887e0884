//! Status-driven retry policy
//!
//! Two failure classes are retried, each with its own budget:
//! - `429 Too Many Requests`: wait for the `Retry-After` hint and try again
//! - `503 Service Unavailable`: back off briefly and try again, once by default
//!
//! Everything else is surfaced to the caller on the first attempt.

use rand::{RngExt, rng};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum retries after a rate-limited response
    pub max_rate_limit_retries: u32,

    /// Wait used when a rate-limited response carries no usable Retry-After
    pub default_retry_after: Duration,

    /// Maximum retries after a service-unavailable response
    pub max_unavailable_retries: u32,

    /// Wait before retrying a service-unavailable response
    pub unavailable_backoff: Duration,

    /// Add up to 30% jitter to every wait
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_rate_limit_retries: 3,
            default_retry_after: Duration::from_secs(1),
            max_unavailable_retries: 1,
            unavailable_backoff: Duration::from_secs(1),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that surfaces every error on the first attempt.
    pub fn none() -> Self {
        Self {
            max_rate_limit_retries: 0,
            max_unavailable_retries: 0,
            ..Self::default()
        }
    }

    /// Create retry policy from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_rate_limit_retries: env_parse("RIFTLINE_MAX_RATE_LIMIT_RETRIES")
                .unwrap_or(defaults.max_rate_limit_retries),
            default_retry_after: env_parse("RIFTLINE_DEFAULT_RETRY_AFTER")
                .map_or(defaults.default_retry_after, Duration::from_secs),
            max_unavailable_retries: env_parse("RIFTLINE_MAX_UNAVAILABLE_RETRIES")
                .unwrap_or(defaults.max_unavailable_retries),
            unavailable_backoff: env_parse("RIFTLINE_UNAVAILABLE_BACKOFF")
                .map_or(defaults.unavailable_backoff, Duration::from_millis),
            jitter: env_parse("RIFTLINE_RETRY_JITTER").unwrap_or(defaults.jitter),
        })
    }

    /// Execute a request with retry logic
    pub async fn execute<F, Fut, T>(&self, mut f: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut rate_limited = 0;
        let mut unavailable = 0;

        loop {
            let delay = match f().await {
                Ok(result) => return Ok(result),
                Err(ApiError::RateLimited { retry_after })
                    if rate_limited < self.max_rate_limit_retries =>
                {
                    rate_limited += 1;
                    let wait = retry_after.unwrap_or(self.default_retry_after);
                    tracing::warn!(
                        "Rate limited (retry {}/{}), waiting {:?}",
                        rate_limited,
                        self.max_rate_limit_retries,
                        wait
                    );
                    wait
                }
                Err(ApiError::ServiceUnavailable)
                    if unavailable < self.max_unavailable_retries =>
                {
                    unavailable += 1;
                    tracing::warn!(
                        "Service unavailable (retry {}/{}), retrying",
                        unavailable,
                        self.max_unavailable_retries
                    );
                    self.unavailable_backoff
                }
                Err(e) => return Err(e),
            };

            tokio::time::sleep(self.with_jitter(delay)).await;
        }
    }

    fn with_jitter(&self, delay: Duration) -> Duration {
        if !self.jitter || delay.is_zero() {
            return delay;
        }
        let jitter = rng().random_range(0.0..0.3);
        #[allow(clippy::cast_precision_loss)]
        // Precision loss is acceptable for jitter calculation
        let jitter_ms = (delay.as_millis() as f64 * jitter) as u64;
        delay + Duration::from_millis(jitter_ms)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
#[allow(
    unsafe_code,
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::significant_drop_tightening
)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    const ENV_VARS: [&str; 5] = [
        "RIFTLINE_MAX_RATE_LIMIT_RETRIES",
        "RIFTLINE_DEFAULT_RETRY_AFTER",
        "RIFTLINE_MAX_UNAVAILABLE_RETRIES",
        "RIFTLINE_UNAVAILABLE_BACKOFF",
        "RIFTLINE_RETRY_JITTER",
    ];

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_rate_limit_retries: 3,
            default_retry_after: Duration::from_millis(1),
            max_unavailable_retries: 1,
            unavailable_backoff: Duration::from_millis(1),
            jitter: false,
        }
    }

    /// Runs `policy` against a sequence of canned outcomes, returning the
    /// final result and the number of attempts made.
    async fn run_sequence(
        policy: &RetryPolicy,
        outcomes: Vec<Result<i32>>,
    ) -> (Result<i32>, usize) {
        let outcomes = Arc::new(Mutex::new(outcomes.into_iter()));
        let calls = Arc::new(Mutex::new(0usize));

        let result = policy
            .execute(|| {
                let outcomes = Arc::clone(&outcomes);
                let calls = Arc::clone(&calls);
                async move {
                    *calls.lock().expect("lock") += 1;
                    outcomes
                        .lock()
                        .expect("lock")
                        .next()
                        .expect("ran out of canned outcomes")
                }
            })
            .await;

        let calls = *calls.lock().expect("lock");
        (result, calls)
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_rate_limit_retries, 3);
        assert_eq!(policy.default_retry_after, Duration::from_secs(1));
        assert_eq!(policy.max_unavailable_retries, 1);
        assert_eq!(policy.unavailable_backoff, Duration::from_secs(1));
        assert!(policy.jitter);
    }

    #[test]
    fn test_from_env() {
        for var in ENV_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
        let policy = RetryPolicy::from_env().expect("Operation should succeed");
        assert_eq!(policy, RetryPolicy::default());

        unsafe {
            std::env::set_var("RIFTLINE_MAX_RATE_LIMIT_RETRIES", "5");
            std::env::set_var("RIFTLINE_DEFAULT_RETRY_AFTER", "2");
            std::env::set_var("RIFTLINE_MAX_UNAVAILABLE_RETRIES", "0");
            std::env::set_var("RIFTLINE_UNAVAILABLE_BACKOFF", "250");
            std::env::set_var("RIFTLINE_RETRY_JITTER", "false");
        }
        let policy = RetryPolicy::from_env().expect("Operation should succeed");
        assert_eq!(policy.max_rate_limit_retries, 5);
        assert_eq!(policy.default_retry_after, Duration::from_secs(2));
        assert_eq!(policy.max_unavailable_retries, 0);
        assert_eq!(policy.unavailable_backoff, Duration::from_millis(250));
        assert!(!policy.jitter);

        for var in ENV_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[tokio::test]
    async fn test_success_on_first_try() {
        let (result, calls) = run_sequence(&fast_policy(), vec![Ok(42)]).await;
        assert_eq!(result.expect("Operation should succeed"), 42);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_rate_limited_then_success() {
        let outcomes = vec![
            Err(ApiError::RateLimited { retry_after: None }),
            Err(ApiError::RateLimited {
                retry_after: Some(Duration::from_millis(2)),
            }),
            Ok(7),
        ];
        let (result, calls) = run_sequence(&fast_policy(), outcomes).await;
        assert_eq!(result.expect("Operation should succeed"), 7);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_rate_limit_budget_exhausted() {
        let policy = RetryPolicy {
            max_rate_limit_retries: 2,
            ..fast_policy()
        };
        let outcomes = (0..3)
            .map(|_| Err(ApiError::RateLimited { retry_after: None }))
            .collect();
        let (result, calls) = run_sequence(&policy, outcomes).await;
        assert!(matches!(result, Err(ApiError::RateLimited { .. })));
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_unavailable_once_then_success() {
        let outcomes = vec![Err(ApiError::ServiceUnavailable), Ok(1)];
        let (result, calls) = run_sequence(&fast_policy(), outcomes).await;
        assert_eq!(result.expect("Operation should succeed"), 1);
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn test_unavailable_twice_fails() {
        let outcomes = vec![
            Err(ApiError::ServiceUnavailable),
            Err(ApiError::ServiceUnavailable),
        ];
        let (result, calls) = run_sequence(&fast_policy(), outcomes).await;
        assert!(matches!(result, Err(ApiError::ServiceUnavailable)));
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn test_budgets_are_independent() {
        let outcomes = vec![
            Err(ApiError::ServiceUnavailable),
            Err(ApiError::RateLimited { retry_after: None }),
            Err(ApiError::RateLimited { retry_after: None }),
            Ok(3),
        ];
        let (result, calls) = run_sequence(&fast_policy(), outcomes).await;
        assert_eq!(result.expect("Operation should succeed"), 3);
        assert_eq!(calls, 4);
    }

    #[tokio::test]
    async fn test_not_retried_errors() {
        for err in [
            ApiError::NotFound,
            ApiError::Forbidden,
            ApiError::Unknown {
                status: 999,
                message: "unknown error reason".to_string(),
            },
        ] {
            let (result, calls) = run_sequence(&fast_policy(), vec![Err(err)]).await;
            assert!(result.is_err());
            assert_eq!(calls, 1);
        }
    }

    #[tokio::test]
    async fn test_none_policy_never_retries() {
        let outcomes = vec![Err(ApiError::ServiceUnavailable)];
        let (result, calls) = run_sequence(&RetryPolicy::none(), outcomes).await;
        assert!(matches!(result, Err(ApiError::ServiceUnavailable)));
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_waits_for_retry_after() {
        let outcomes = vec![
            Err(ApiError::RateLimited {
                retry_after: Some(Duration::from_millis(30)),
            }),
            Ok(0),
        ];
        let start = Instant::now();
        let (result, _) = run_sequence(&fast_policy(), outcomes).await;
        assert!(result.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_jitter_bounds() {
        let policy = RetryPolicy {
            jitter: true,
            ..fast_policy()
        };
        let base = Duration::from_millis(1000);
        for _ in 0..50 {
            let delay = policy.with_jitter(base);
            assert!(delay >= base);
            assert!(delay < Duration::from_millis(1300));
        }
        assert_eq!(policy.with_jitter(Duration::ZERO), Duration::ZERO);
    }
}
