//! Fixed-delay retry policy
//!
//! Every failed attempt counts against the same budget; there is no
//! distinction between transient and permanent errors.

use super::types::RoundState;
use crate::config::RetrySettings;
use crate::error::Error;
use std::time::Duration;

/// How often and how patiently a single page is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Attempts per page, counting the first one
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// Delay between attempts
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    /// Create a policy. A zero attempt budget is raised to one.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Total attempts allowed per page
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay between attempts
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Transition after a failed attempt in a round that had already failed
    /// `failures` times.
    pub fn after_failure(&self, failures: u32, error: Error) -> RoundState {
        let failures = failures + 1;
        if failures >= self.max_attempts {
            RoundState::Failed { failures, error }
        } else {
            RoundState::Retrying { failures, error }
        }
    }
}

impl From<RetrySettings> for RetryPolicy {
    fn from(settings: RetrySettings) -> Self {
        Self::new(
            settings.max_attempts,
            Duration::from_secs(settings.delay_secs),
        )
    }
}
