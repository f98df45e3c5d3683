//! Classification of non-success responses.

use guildvault_error::{FetchError, FetchErrorKind, GuildVaultError};
use serde::Deserialize;
use tracing::{debug, error};

/// Body of a 429 response.
#[derive(Debug, Deserialize)]
struct RateLimitBody {
    /// Seconds to wait, fractional
    retry_after: f64,
}

fn seconds_to_ms(seconds: f64) -> Option<u64> {
    if seconds.is_finite() && seconds >= 0.0 {
        Some((seconds * 1000.0).ceil() as u64)
    } else {
        None
    }
}

/// Delay requested by a rate-limited response, in milliseconds.
///
/// The `Retry-After` header wins; the JSON body's `retry_after` field is the
/// fallback. Both are expressed in (possibly fractional) seconds.
pub fn parse_retry_after_ms(header: Option<&str>, body: &str) -> Option<u64> {
    header
        .and_then(|h| h.trim().parse::<f64>().ok())
        .and_then(seconds_to_ms)
        .or_else(|| {
            serde_json::from_str::<RateLimitBody>(body)
                .ok()
                .and_then(|b| seconds_to_ms(b.retry_after))
        })
}

/// Map a non-success status, its `Retry-After` header and its body to a fetch error kind.
pub fn classify_status(status: u16, retry_after: Option<&str>, body: &str) -> FetchErrorKind {
    let retry_after_ms = if status == 429 {
        parse_retry_after_ms(retry_after, body)
    } else {
        None
    };
    FetchErrorKind::from_status(status, body, retry_after_ms)
}

/// Turn a transport failure into a fetch error.
#[track_caller]
pub(crate) fn transport_error(err: reqwest::Error, resource: &str) -> GuildVaultError {
    error!(resource, error = %err, "Request failed");
    let kind = if err.is_timeout() {
        FetchErrorKind::Timeout
    } else {
        FetchErrorKind::Transport(err.to_string())
    };
    FetchError::new(kind, resource).into()
}

/// Consume a non-success response into a fetch error.
pub(crate) async fn status_error(response: reqwest::Response, resource: &str) -> GuildVaultError {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = response.text().await.unwrap_or_default();
    let kind = classify_status(status, retry_after.as_deref(), &body);
    if kind.is_retryable() {
        debug!(resource, status, %kind, "Transient API failure");
    } else {
        error!(resource, status, body = %body, "API returned error");
    }
    FetchError::new(kind, resource).into()
}
