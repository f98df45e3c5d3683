//! Scheduler configuration.

use derive_getters::Getters;
use guildvault_error::{GuildVaultResult, RateLimitError, RateLimitErrorKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backoff policy for retryable fetch failures.
///
/// `max_attempts = 1` disables retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(default)]
#[builder(setter(into), default)]
pub struct RetryConfig {
    /// Total attempts including the first
    max_attempts: u32,
    /// Delay before the first retry
    initial_backoff_ms: u64,
    /// Upper bound on any single delay
    max_backoff_ms: u64,
    /// Growth factor between consecutive delays
    backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 30_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Delay before the first retry.
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    /// Upper bound on any single delay.
    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    /// Check the policy is usable.
    pub fn validate(&self) -> GuildVaultResult<()> {
        if self.max_attempts == 0 {
            return Err(invalid("retry.max_attempts must be at least 1"));
        }
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            return Err(invalid(
                "retry.backoff_multiplier must be a finite number of at least 1.0",
            ));
        }
        Ok(())
    }
}

/// Throttling limits for a [`crate::Scheduler`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(default)]
#[builder(setter(into), default)]
pub struct SchedulerConfig {
    /// Maximum fetches in flight across all keys
    max_concurrent: usize,
    /// Minimum delay between two fetches sharing a key, 0 disables spacing
    min_spacing_ms: u64,
    /// Retry policy applied to every scheduled fetch
    retry: RetryConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 4,
            min_spacing_ms: 100,
            retry: RetryConfig::default(),
        }
    }
}

impl SchedulerConfig {
    /// Minimum delay between two fetches sharing a key.
    pub fn min_spacing(&self) -> Duration {
        Duration::from_millis(self.min_spacing_ms)
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> GuildVaultResult<()> {
        if self.max_concurrent == 0 {
            return Err(invalid("max_concurrent must be at least 1"));
        }
        self.retry.validate()
    }
}

#[track_caller]
fn invalid(message: &str) -> guildvault_error::GuildVaultError {
    RateLimitError::new(RateLimitErrorKind::InvalidConfig(message.to_string())).into()
}
