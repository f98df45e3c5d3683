//! Retry with exponential backoff.

use crate::{JobKey, RetryConfig};
use guildvault_error::GuildVaultResult;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Run `operation` until it succeeds, fails permanently, or runs out of
/// attempts.
///
/// Only errors reporting themselves retryable are retried. A server-supplied
/// retry-after hint replaces the computed delay for that attempt.
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    job: &JobKey,
    mut operation: F,
) -> GuildVaultResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = GuildVaultResult<T>>,
{
    let mut attempt = 0;
    let mut backoff = config.initial_backoff();

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(%job, attempt, "Fetch succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    return Err(err);
                }

                if attempt >= *config.max_attempts() {
                    warn!(%job, attempt, error = %err, "All retry attempts exhausted");
                    return Err(err);
                }

                let delay = err
                    .retry_after()
                    .map(|hint| hint.min(config.max_backoff()))
                    .unwrap_or(backoff);
                debug!(%job, attempt, delay_ms = delay.as_millis() as u64, error = %err, "Retrying fetch");

                sleep(delay).await;

                let grown = Duration::try_from_secs_f64(
                    backoff.as_secs_f64() * *config.backoff_multiplier(),
                )
                .unwrap_or(config.max_backoff());
                backoff = std::cmp::min(grown, config.max_backoff());
            }
        }
    }
}
