//! Channel messages.

use crate::{Snowflake, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A file attached to a message.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Attachment {
    /// Attachment id
    id: Snowflake,
    /// Original file name
    filename: String,
    /// Download URL
    url: String,
    /// Size in bytes
    #[serde(default)]
    #[builder(default)]
    size: u64,
}

/// A message posted in a channel.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Message {
    /// Message id
    id: Snowflake,
    /// Author account
    author: User,
    /// Text content
    #[serde(default)]
    #[builder(default)]
    content: String,
    /// Rich embeds, kept verbatim
    #[serde(default)]
    #[builder(default)]
    embeds: Vec<JsonValue>,
    /// Interactive components, kept verbatim
    #[serde(default)]
    #[builder(default)]
    components: Vec<JsonValue>,
    /// Attached files
    #[serde(default)]
    #[builder(default)]
    attachments: Vec<Attachment>,
    /// Whether the message is pinned
    #[serde(default)]
    #[builder(default)]
    pinned: bool,
    /// When the message was sent
    timestamp: DateTime<Utc>,
}

/// One page request for channel history.
///
/// Pages are returned newest first; `before` continues from the oldest
/// message of the previous page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageQuery {
    /// Page size, 1-100
    pub limit: u8,
    /// Only return messages older than this id
    pub before: Option<Snowflake>,
}
