//! Error types for guildvault.
//!
//! Every leaf error records the file and line where it was raised. Leaf errors
//! convert into [`GuildVaultErrorKind`] and from there into the boxed
//! [`GuildVaultError`] that crosses crate boundaries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod fetch;
mod http;
mod image;
mod json;
mod rate_limit;
mod record;

pub use config::ConfigError;
pub use fetch::{FetchError, FetchErrorKind};
pub use http::HttpError;
pub use image::ImageError;
pub use json::JsonError;
pub use rate_limit::{RateLimitError, RateLimitErrorKind};
pub use record::RecordError;

use std::time::Duration;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GuildVaultErrorKind {
    /// HTTP transport error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// A remote collection fetch failed
    Fetch(FetchError),
    /// An image download failed
    Image(ImageError),
    /// Scheduler misconfiguration or shutdown
    RateLimit(RateLimitError),
    /// A record could not be assembled
    Record(RecordError),
}

impl std::fmt::Display for GuildVaultErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuildVaultErrorKind::Http(e) => write!(f, "{}", e),
            GuildVaultErrorKind::Json(e) => write!(f, "{}", e),
            GuildVaultErrorKind::Config(e) => write!(f, "{}", e),
            GuildVaultErrorKind::Fetch(e) => write!(f, "{}", e),
            GuildVaultErrorKind::Image(e) => write!(f, "{}", e),
            GuildVaultErrorKind::RateLimit(e) => write!(f, "{}", e),
            GuildVaultErrorKind::Record(e) => write!(f, "{}", e),
        }
    }
}

/// guildvault error with kind discrimination.
#[derive(Debug)]
pub struct GuildVaultError(Box<GuildVaultErrorKind>);

impl GuildVaultError {
    /// Create a new error from a kind.
    pub fn new(kind: GuildVaultErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GuildVaultErrorKind {
        &self.0
    }

    /// Whether the failed operation may succeed if issued again.
    ///
    /// Only remote fetch failures are ever retryable.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            GuildVaultErrorKind::Fetch(e) => e.kind().is_retryable(),
            _ => false,
        }
    }

    /// Server-requested delay before retrying, if the failure carried one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self.kind() {
            GuildVaultErrorKind::Fetch(e) => e.kind().retry_after(),
            _ => None,
        }
    }
}

impl std::fmt::Display for GuildVaultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GuildVault Error: {}", self.0)
    }
}

impl std::error::Error for GuildVaultError {}

// Generic From implementation for any type that converts to GuildVaultErrorKind
impl<T> From<T> for GuildVaultError
where
    T: Into<GuildVaultErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for guildvault operations.
pub type GuildVaultResult<T> = std::result::Result<T, GuildVaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_carry_retry_policy() {
        let err: GuildVaultError = FetchError::new(
            FetchErrorKind::RateLimited {
                retry_after_ms: Some(40),
            },
            "GET /guilds/1/roles",
        )
        .into();
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(Duration::from_millis(40)));
    }

    #[test]
    fn test_non_fetch_errors_are_not_retryable() {
        let err: GuildVaultError = ConfigError::new("missing token").into();
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("missing token"));
    }
}
