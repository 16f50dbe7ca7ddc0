//! Retry policy for remote calls
//!
//! Transient failures (see `PortError::is_transient`) are retried after a
//! base delay plus up to 25% random jitter. A rate-limited call waits for the
//! server's `retry-after` instead, and is not retried at all when that wait
//! exceeds `max_retry_after`. Everything else is returned as is.

use std::future::Future;
use std::time::Duration;

use core_kernel::PortError;
use rand::Rng;
use tokio::time::sleep;
use tracing::warn;

/// How many times, and how long to wait, before giving up on a remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Delay before each retry, before jitter
    pub base_delay: Duration,
    /// Longest `retry-after` the policy will wait out
    pub max_retry_after: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            base_delay: Duration::from_millis(250),
            max_retry_after: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Base delay plus up to 25% jitter
    pub fn backoff(&self) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let jitter_ms = (base_ms as f64 * 0.25 * rand::thread_rng().gen::<f64>()) as u64;
        Duration::from_millis(base_ms + jitter_ms)
    }

    /// Delay before retrying `error`, or `None` when it should not be retried
    pub fn delay_for(&self, error: &PortError) -> Option<Duration> {
        if !error.is_transient() {
            return None;
        }
        match error {
            PortError::RateLimited { retry_after_secs } => {
                let wait = Duration::from_secs(*retry_after_secs);
                (wait <= self.max_retry_after).then(|| wait.max(self.backoff()))
            }
            _ => Some(self.backoff()),
        }
    }

    /// Runs `operation`, retrying transient failures
    pub async fn run<T, F, Fut>(&self, operation_name: &str, mut operation: F) -> Result<T, PortError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, PortError>>,
    {
        let mut attempt = 0;
        loop {
            let error = match operation().await {
                Err(e) if attempt < self.max_retries => e,
                result => return result,
            };
            match self.delay_for(&error) {
                Some(delay) => {
                    attempt += 1;
                    warn!(
                        operation = operation_name,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Transient failure, retrying"
                    );
                    sleep(delay).await;
                }
                None => return Err(error),
            }
        }
    }
}
