//! Record assembly error types.

/// Raised when a backup record cannot be assembled from its parts.
#[derive(Debug, Clone)]
pub struct RecordError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RecordError {
    /// Create a new RecordError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Record Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for RecordError {}
