use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::error::CellBaseError;

pub const DEFAULT_RETRIES: u32 = 5;
/// Attempt index past which the backoff window stops growing.
pub const DEFAULT_TRUNCATE: u32 = 8;

/// Truncated binary exponential backoff with jitter.
///
/// `retries` of `None` means retry forever. `delay_unit` scales the whole
/// schedule; tests run it at `Duration::ZERO`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub retries: Option<u32>,
    pub truncate: u32,
    pub delay_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: Some(DEFAULT_RETRIES),
            truncate: DEFAULT_TRUNCATE,
            delay_unit: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(retries: u32) -> Self {
        Self {
            retries: Some(retries),
            ..Self::default()
        }
    }

    pub fn forever() -> Self {
        Self {
            retries: None,
            ..Self::default()
        }
    }

    pub fn with_truncate(mut self, truncate: u32) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }

    /// Sleep before retry `attempt` (1-based): uniform over
    /// `[0, min(2^attempt, 2^truncate) - 1)` units.
    fn backoff(&self, attempt: u32) -> Duration {
        let window = (1u64 << attempt.min(self.truncate)).saturating_sub(1);
        let units = if window == 0 {
            0
        } else {
            rand::rng().random_range(0..window)
        };
        self.delay_unit * units as u32
    }
}

/// Runs `op`, re-running it on retryable failures per the policy. Anything
/// not retryable propagates immediately; an exhausted budget re-raises the
/// last error.
pub fn retry<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T, CellBaseError>
where
    F: FnMut() -> Result<T, CellBaseError>,
{
    let mut attempt: u32 = 0;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => {
                if let Some(max) = policy.retries
                    && attempt >= max
                {
                    return Err(err);
                }
                attempt = attempt.saturating_add(1);
                let delay = policy.backoff(attempt);
                warn!(
                    error = %err,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "transient failure, backing off"
                );
                thread::sleep(delay);
            }
            Err(err) => return Err(err),
        }
    }
}
