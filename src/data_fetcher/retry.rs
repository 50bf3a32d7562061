//! Retry budget and the pause between attempts.

use crate::constants::retry;
use crate::error::AppError;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::time::Duration;

/// How many times to try and how long to wait in between.
///
/// The delay is fixed; there is no exponential growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Builds a policy, rejecting a zero attempt budget.
    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self, AppError> {
        if max_attempts == 0 {
            return Err(AppError::config_error("max_attempts must be at least 1"));
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Longest time a fetch can spend waiting between attempts.
    pub fn worst_case_wait(&self) -> Duration {
        self.delay.saturating_mul(self.max_attempts - 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: retry::MAX_ATTEMPTS,
            delay: Duration::from_secs(retry::DELAY_SECONDS),
        }
    }
}

/// Pauses the fetch between attempts. Swapped out in tests to avoid real waiting.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> BoxFuture<'_, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'_, ()> {
        tokio::time::sleep(duration).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_default_policy_matches_constants() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let result = RetryPolicy::new(0, Duration::from_secs(1));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_delay_allowed() {
        let policy = RetryPolicy::new(1, Duration::ZERO).unwrap();
        assert_eq!(policy.delay(), Duration::ZERO);
    }

    #[test]
    fn test_worst_case_wait() {
        let policy = RetryPolicy::new(3, Duration::from_secs(2)).unwrap();
        assert_eq!(policy.worst_case_wait(), Duration::from_secs(4));

        let single = RetryPolicy::new(1, Duration::from_secs(2)).unwrap();
        assert_eq!(single.worst_case_wait(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_tokio_sleeper_waits() {
        let start = Instant::now();
        TokioSleeper.sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
