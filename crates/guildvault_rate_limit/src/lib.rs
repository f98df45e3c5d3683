//! Fetch scheduling for guildvault.
//!
//! Every remote collection fetch runs through a [`Scheduler`], which caps the
//! number of in-flight calls, spaces calls that share a [`JobKey`], and
//! retries transient failures with exponential backoff.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod config;
mod job;
mod retry;
mod scheduler;

pub use clock::{TokioClock, TokioInstant};
pub use config::{RetryConfig, RetryConfigBuilder, SchedulerConfig, SchedulerConfigBuilder};
pub use job::{JobKey, jobs};
pub use retry::retry_with_backoff;
pub use scheduler::{Scheduler, SchedulerPermit};
