//! Keyed fetch scheduler built on governor and a Tokio semaphore.
//!
//! Two limits apply to every scheduled fetch:
//! - a global concurrency cap, enforced by a [`Semaphore`]
//! - a minimum spacing between fetches sharing a [`JobKey`], enforced by a
//!   keyed GCRA limiter with a burst of one
//!
//! Fetches under different keys are never ordered relative to each other.

use crate::{JobKey, SchedulerConfig, TokioClock, retry_with_backoff};
use governor::clock::Clock;
use governor::middleware::NoOpMiddleware;
use governor::state::keyed::DashMapStateStore;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use guildvault_error::{GuildVaultResult, RateLimitError, RateLimitErrorKind};
use std::fmt;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::time::sleep;
use tracing::{debug, error, trace};

type KeyedLimiter<C> = GovernorRateLimiter<
    JobKey,
    DashMapStateStore<JobKey>,
    C,
    NoOpMiddleware<<C as Clock>::Instant>,
>;

/// Throttles remote fetches by job key.
///
/// Generic over the governor clock. The default [`TokioClock`] measures
/// spacing on the same timeline the scheduler sleeps on, so paused Tokio time
/// drives [`schedule`](Self::schedule) deterministically. Other clocks suit
/// [`try_acquire`](Self::try_acquire) only.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = Scheduler::new(SchedulerConfig::default())?;
/// let bans = scheduler.schedule(jobs::BANS, || source.fetch_bans()).await?;
/// ```
#[derive(Clone)]
pub struct Scheduler<C = TokioClock>
where
    C: Clock + Clone,
{
    config: SchedulerConfig,
    spacing: Option<Arc<KeyedLimiter<C>>>,
    slots: Arc<Semaphore>,
    clock: C,
}

impl Scheduler<TokioClock> {
    /// Create a scheduler on Tokio time.
    pub fn new(config: SchedulerConfig) -> GuildVaultResult<Self> {
        Self::with_clock(config, TokioClock)
    }
}

impl<C> Scheduler<C>
where
    C: Clock + Clone,
{
    /// Create a scheduler whose spacing is measured on `clock`.
    pub fn with_clock(config: SchedulerConfig, clock: C) -> GuildVaultResult<Self> {
        config.validate()?;

        let spacing = Quota::with_period(config.min_spacing())
            .map(|quota| Arc::new(GovernorRateLimiter::dashmap_with_clock(quota, clock.clone())));
        let slots = Arc::new(Semaphore::new(*config.max_concurrent()));

        debug!(
            max_concurrent = config.max_concurrent(),
            min_spacing_ms = config.min_spacing_ms(),
            max_attempts = config.retry().max_attempts(),
            "Created fetch scheduler"
        );

        Ok(Self {
            config,
            spacing,
            slots,
            clock,
        })
    }

    /// The limits this scheduler enforces.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Fetch slots not currently held.
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }

    /// Run `operation` under the limits for `job`, retrying transient
    /// failures.
    ///
    /// Every attempt, retries included, waits for spacing and a slot. The
    /// error of the last attempt is returned unchanged.
    pub async fn schedule<T, F, Fut>(
        &self,
        job: impl Into<JobKey>,
        mut operation: F,
    ) -> GuildVaultResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = GuildVaultResult<T>>,
    {
        let job = job.into();
        let key = &job;
        trace!(%job, "Scheduling fetch");

        retry_with_backoff(self.config.retry(), &job, || {
            let fetch = operation();
            async move {
                let _permit = self.acquire(key).await?;
                fetch.await
            }
        })
        .await
        .inspect_err(|e| error!(%job, error = %e, "Scheduled fetch failed"))
    }

    /// Wait until `job` may run, then take a slot.
    ///
    /// Spacing is awaited before the slot so a waiting job never holds one.
    pub async fn acquire(&self, job: &JobKey) -> GuildVaultResult<SchedulerPermit> {
        if let Some(limiter) = &self.spacing {
            loop {
                let wait = match limiter.check_key(job) {
                    Ok(_) => break,
                    Err(not_until) => not_until.wait_time_from(self.clock.now()),
                };
                trace!(%job, wait_ms = wait.as_millis() as u64, "Waiting for job spacing");
                sleep(wait).await;
            }
        }

        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| RateLimitError::new(RateLimitErrorKind::Closed))?;

        Ok(SchedulerPermit { _permit: permit })
    }

    /// Take a slot for `job` without waiting.
    ///
    /// Returns `None` when every slot is held or `job` ran too recently.
    /// A `None` consumes no spacing cell.
    pub fn try_acquire(&self, job: impl Into<JobKey>) -> Option<SchedulerPermit> {
        let job = job.into();
        let permit = self.slots.clone().try_acquire_owned().ok()?;

        if let Some(limiter) = &self.spacing {
            limiter.check_key(&job).ok()?;
        }

        Some(SchedulerPermit { _permit: permit })
    }

    /// Stop handing out slots. Pending and future acquisitions fail.
    pub fn close(&self) {
        self.slots.close();
    }
}

impl<C> fmt::Debug for Scheduler<C>
where
    C: Clock + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("config", &self.config)
            .field("available_slots", &self.available_slots())
            .finish()
    }
}

/// A held fetch slot, released on drop.
#[derive(Debug)]
pub struct SchedulerPermit {
    _permit: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchedulerConfigBuilder;

    #[tokio::test]
    async fn test_permit_releases_on_drop() {
        let config = SchedulerConfigBuilder::default()
            .max_concurrent(1usize)
            .min_spacing_ms(0u64)
            .build()
            .unwrap();
        let scheduler = Scheduler::new(config).unwrap();

        let held = scheduler.acquire(&JobKey::new("a")).await.unwrap();
        assert!(scheduler.try_acquire("b").is_none());

        drop(held);
        assert!(scheduler.try_acquire("b").is_some());
    }

    #[tokio::test]
    async fn test_closed_scheduler_fails_acquire() {
        let scheduler = Scheduler::new(SchedulerConfig::default()).unwrap();
        scheduler.close();
        let err = scheduler.acquire(&JobKey::new("a")).await.unwrap_err();
        assert!(err.to_string().contains("Scheduler closed"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SchedulerConfigBuilder::default()
            .max_concurrent(0usize)
            .build()
            .unwrap();
        assert!(Scheduler::new(config).is_err());
    }
}
