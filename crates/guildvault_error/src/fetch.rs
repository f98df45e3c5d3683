//! Remote fetch error types.

use std::time::Duration;

/// Ways a remote collection fetch can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// The remote API asked us to slow down.
    #[display("Rate limited by remote API")]
    RateLimited {
        /// Server-provided delay before the next attempt, in milliseconds
        retry_after_ms: Option<u64>,
    },
    /// The request did not complete in time.
    #[display("Request timed out")]
    Timeout,
    /// Credentials were missing or rejected.
    #[display("Unauthorized")]
    Unauthorized,
    /// Credentials were valid but lack access to the resource.
    #[display("Forbidden")]
    Forbidden,
    /// The resource does not exist.
    #[display("Not found")]
    NotFound,
    /// The remote API failed with a 5xx status.
    #[display("Server error (status {_0})")]
    Server(u16),
    /// Any other non-success status.
    #[display("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        body: String,
    },
    /// Connection-level failure.
    #[display("Transport failure: {_0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[display("Failed to decode response: {_0}")]
    Decode(String),
}

impl FetchErrorKind {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, body: impl Into<String>, retry_after_ms: Option<u64>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 => Self::Timeout,
            429 => Self::RateLimited { retry_after_ms },
            500..=599 => Self::Server(status),
            _ => Self::Status {
                status,
                body: body.into(),
            },
        }
    }

    /// Whether issuing the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Timeout | Self::Server(_) | Self::Transport(_)
        )
    }

    /// Delay requested by the server before retrying, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited {
                retry_after_ms: Some(ms),
            } => Some(Duration::from_millis(*ms)),
            _ => None,
        }
    }
}

/// A failed remote fetch with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} while fetching {} at line {} in {}", kind, resource, line, file)]
pub struct FetchError {
    kind: FetchErrorKind,
    resource: String,
    line: u32,
    file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use guildvault_error::{FetchError, FetchErrorKind};
    ///
    /// let err = FetchError::new(FetchErrorKind::NotFound, "GET /guilds/1/bans");
    /// assert!(!err.kind().is_retryable());
    /// ```
    #[track_caller]
    pub fn new(kind: FetchErrorKind, resource: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            resource: resource.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FetchErrorKind {
        &self.kind
    }

    /// The remote resource that failed.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(FetchErrorKind::from_status(401, "", None), FetchErrorKind::Unauthorized);
        assert_eq!(FetchErrorKind::from_status(403, "", None), FetchErrorKind::Forbidden);
        assert_eq!(FetchErrorKind::from_status(404, "", None), FetchErrorKind::NotFound);
        assert_eq!(FetchErrorKind::from_status(502, "", None), FetchErrorKind::Server(502));
        assert_eq!(
            FetchErrorKind::from_status(429, "", Some(1500)),
            FetchErrorKind::RateLimited {
                retry_after_ms: Some(1500)
            }
        );
        assert!(matches!(
            FetchErrorKind::from_status(400, "bad request", None),
            FetchErrorKind::Status { status: 400, .. }
        ));
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(FetchErrorKind::Timeout.is_retryable());
        assert!(FetchErrorKind::Server(503).is_retryable());
        assert!(FetchErrorKind::Transport("reset".into()).is_retryable());
        assert!(!FetchErrorKind::Unauthorized.is_retryable());
        assert!(!FetchErrorKind::Decode("eof".into()).is_retryable());
    }

    #[test]
    fn test_retry_after_hint() {
        let kind = FetchErrorKind::RateLimited {
            retry_after_ms: Some(250),
        };
        assert_eq!(kind.retry_after(), Some(Duration::from_millis(250)));
        assert_eq!(FetchErrorKind::Timeout.retry_after(), None);
    }
}
