//! Binary payloads stored either inline or by reference.

use serde::{Deserialize, Serialize};

/// Image or file content, inline as base64 or as a URL.
///
/// Flattened into its parent so the parent carries exactly one of a
/// `base64` or a `url` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPayload {
    /// Inline content, standard base64 alphabet with padding
    Base64(String),
    /// Reference to remotely hosted content
    Url(String),
}

impl MediaPayload {
    /// Whether the content is stored inline.
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Base64(_))
    }
}
