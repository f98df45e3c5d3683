//! A governor clock that reads Tokio time.
//!
//! The scheduler sleeps on Tokio timers, so measuring spacing on the same
//! clock keeps waits correct when Tokio time is paused or advanced.

use governor::clock::{Clock, Reference};
use governor::nanos::Nanos;
use std::ops::Add;
use std::time::Duration;
use tokio::time::Instant;

/// Governor clock backed by [`tokio::time::Instant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokioClock;

/// A reading of [`TokioClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokioInstant(Instant);

impl TokioInstant {
    /// The underlying Tokio instant.
    pub fn into_inner(self) -> Instant {
        self.0
    }
}

impl Add<Nanos> for TokioInstant {
    type Output = Self;

    fn add(self, other: Nanos) -> Self {
        Self(self.0 + Duration::from(other))
    }
}

impl Reference for TokioInstant {
    fn duration_since(&self, earlier: Self) -> Nanos {
        self.0.saturating_duration_since(earlier.0).into()
    }

    fn saturating_sub(&self, duration: Nanos) -> Self {
        self.0
            .checked_sub(Duration::from(duration))
            .map(Self)
            .unwrap_or(*self)
    }
}

impl Clock for TokioClock {
    type Instant = TokioInstant;

    fn now(&self) -> Self::Instant {
        TokioInstant(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_clock_follows_paused_time() {
        let clock = TokioClock;
        let before = clock.now();

        tokio::time::advance(Duration::from_millis(250)).await;

        let elapsed = Duration::from(clock.now().duration_since(before));
        assert_eq!(elapsed, Duration::from_millis(250));
    }

    #[test]
    fn test_reference_arithmetic_saturates() {
        let now = TokioClock.now();
        let later = now + Nanos::from(Duration::from_secs(1));

        assert_eq!(Duration::from(now.duration_since(later)), Duration::ZERO);
        assert_eq!(
            Duration::from(later.duration_since(now)),
            Duration::from_secs(1)
        );
        assert_eq!(
            Reference::saturating_sub(&later, Duration::from_secs(1).into()),
            now
        );
    }
}
