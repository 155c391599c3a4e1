use std::time::Duration;

use appctl_common::config::Config;
use appctl_common::error::ApiError;
use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{ApiRequest, ApiResponse, RequestSender, Transport};

const BACKOFF_FACTOR: u32 = 2;
const MAX_JITTER: f64 = 0.1;

/// How often and how patiently a request is repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero is treated as one.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl From<&Config> for RetryPolicy {
    fn from(cfg: &Config) -> Self {
        Self {
            max_attempts: cfg.retries,
            ..Self::default()
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after `attempt` (1-based) failed.
    ///
    /// A server supplied `Retry-After` wins over the exponential schedule,
    /// both are capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(hint) = retry_after {
            return hint.min(self.max_delay);
        }

        let exponent = attempt.saturating_sub(1);
        let backoff = self
            .base_delay
            .saturating_mul(BACKOFF_FACTOR.saturating_pow(exponent));
        let jitter = backoff
            .min(self.max_delay)
            .mul_f64(rand::random::<f64>() * MAX_JITTER);

        backoff.saturating_add(jitter).min(self.max_delay)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// [`RequestSender`] that repeats transient failures according to a [`RetryPolicy`].
pub struct RetryingSender<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryingSender<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    async fn attempt(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(response.into_error())
        }
    }
}

#[async_trait]
impl<T: Transport> RequestSender for RetryingSender<T> {
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if request.idempotency_key.is_none() && request.needs_idempotency_key() {
            request.idempotency_key = Some(Uuid::new_v4().to_string());
        }

        let max_attempts = self.policy.attempts();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let err = match self.attempt(&request).await {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            if !err.is_retryable() {
                return Err(err);
            }

            if attempt >= max_attempts {
                if max_attempts > 1 {
                    warn!(
                        method = %request.method,
                        path = %request.path,
                        "giving up after {attempt} attempts: {err}"
                    );
                }
                return Err(err);
            }

            let delay = self.policy.delay_for(attempt, err.retry_after());
            debug!(
                method = %request.method,
                path = %request.path,
                "attempt {attempt}/{max_attempts} failed ({err}), retrying in {}ms",
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}
