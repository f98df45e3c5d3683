//! Message and thread records.

use crate::{ChannelType, MediaPayload, Snowflake};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A message attachment, inline or by URL.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct FileRecord {
    name: String,
    #[serde(flatten)]
    attachment: MediaPayload,
}

/// A captured message.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct MessageRecord {
    source_id: Snowflake,
    user_id: Snowflake,
    username: String,
    #[builder(default)]
    avatar_url: Option<String>,
    #[builder(default)]
    content: String,
    #[builder(default)]
    embeds: Vec<JsonValue>,
    #[builder(default)]
    components: Vec<JsonValue>,
    #[builder(default)]
    files: Vec<FileRecord>,
    #[builder(default)]
    pinned: bool,
    /// Milliseconds since the Unix epoch
    sent_at: i64,
}

/// An active thread under a text channel.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ThreadRecord {
    source_id: Snowflake,
    name: String,
    channel_type: ChannelType,
    #[builder(default)]
    archived: bool,
    #[builder(default)]
    auto_archive_duration: u32,
    #[builder(default)]
    locked: bool,
    #[builder(default)]
    rate_limit_per_user: u32,
    /// Oldest first
    #[builder(default)]
    messages: Vec<MessageRecord>,
}
