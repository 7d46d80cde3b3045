//! Retry policy for single driver actions.

use std::future::Future;
use std::time::Duration;

use cinebot_config::RetrySettings;
use tokio::time::sleep;
use tracing::warn;

use crate::error::DriverError;

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Base delay between retries.
    pub base_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Exponential backoff multiplier.
    pub backoff_multiplier: f64,
    /// Add jitter to delays.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&RetrySettings::default())
    }
}

impl From<&RetrySettings> for RetryConfig {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            base_delay: Duration::from_millis(settings.base_delay_ms),
            max_delay: Duration::from_millis(settings.max_delay_ms),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// No retries at all.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Calculate delay for a given attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self.base_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let delay = delay.min(self.max_delay.as_millis() as f64);

        let delay_ms = if self.jitter {
            let jitter = rand_jitter(delay * 0.1);
            (delay + jitter).max(0.0) as u64
        } else {
            delay as u64
        };

        Duration::from_millis(delay_ms)
    }

    /// Run `operation`, retrying transient driver failures.
    pub async fn run<F, Fut, T>(&self, action: &str, operation: F) -> Result<T, DriverError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, DriverError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !is_retryable(&e) || attempt >= self.max_retries {
                        return Err(e);
                    }

                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        "{} failed (attempt {}/{}): {}, retrying in {:?}",
                        action,
                        attempt + 1,
                        self.max_retries + 1,
                        e,
                        delay
                    );

                    attempt += 1;
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Simple jitter using system time.
fn rand_jitter(max: f64) -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos as f64 / u32::MAX as f64) * max * 2.0 - max
}

/// Check if a driver error is worth another attempt.
///
/// A missing anchor day or a dead session will not fix itself.
pub fn is_retryable(error: &DriverError) -> bool {
    match error {
        DriverError::ElementNotFound(_) => true,
        DriverError::Timeout(_) => true,
        DriverError::ActionFailed(_) => true,
        DriverError::AnchorDayNotFound(_) => false,
        DriverError::SessionClosed => false,
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
