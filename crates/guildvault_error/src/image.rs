//! Image download error types.

/// An image could not be downloaded for inline capture.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} ({}) at line {} in {}", message, url, line, file)]
pub struct ImageError {
    url: String,
    message: String,
    line: u32,
    file: &'static str,
}

impl ImageError {
    /// Create a new image error with automatic location tracking.
    #[track_caller]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            url: url.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The URL that failed.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// What went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }
}
