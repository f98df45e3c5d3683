//! Channel records and the category tree.

use crate::{ChannelType, MessageRecord, Snowflake, ThreadRecord};
use serde::{Deserialize, Serialize};

/// Role-scoped permission override captured by role name.
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
#[serde(rename_all = "camelCase")]
pub struct PermissionOverwriteRecord {
    role_name: String,
    /// Allowed bits, decimal string
    allow: String,
    /// Denied bits, decimal string
    deny: String,
}

/// A voice channel.
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
#[serde(rename_all = "camelCase")]
pub struct VoiceChannelRecord {
    source_id: Snowflake,
    name: String,
    position: i64,
    bitrate: Option<u32>,
    user_limit: Option<u32>,
    /// Name of the parent category
    parent: Option<String>,
    permissions: Vec<PermissionOverwriteRecord>,
}

/// A text or announcement channel with its recent history.
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
pub struct TextChannelRecord {
    #[builder(default)]
    source_id: Snowflake,
    name: String,
    position: i64,
    #[serde(rename = "type")]
    channel_type: ChannelType,
    #[builder(default)]
    nsfw: bool,
    #[builder(default)]
    rate_limit_per_user: u32,
    #[builder(default)]
    parent: Option<String>,
    #[builder(default)]
    topic: Option<String>,
    #[builder(default)]
    permissions: Vec<PermissionOverwriteRecord>,
    #[builder(default)]
    is_news: bool,
    /// Oldest first
    #[builder(default)]
    messages: Vec<MessageRecord>,
    #[builder(default)]
    threads: Vec<ThreadRecord>,
}

/// A stage channel.
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
pub struct StageChannelRecord {
    #[builder(default)]
    source_id: Snowflake,
    name: String,
    position: i64,
    #[builder(default)]
    nsfw: bool,
    #[builder(default)]
    rate_limit_per_user: u32,
    #[builder(default)]
    topic: Option<String>,
    #[builder(default)]
    bitrate: Option<u32>,
    #[builder(default)]
    user_limit: Option<u32>,
    #[builder(default)]
    parent: Option<String>,
    #[builder(default)]
    permissions: Vec<PermissionOverwriteRecord>,
    #[builder(default)]
    messages: Vec<MessageRecord>,
}

/// A captured non-category channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChannelRecord {
    /// Text or announcement channel
    Text(TextChannelRecord),
    /// Voice channel
    Voice(VoiceChannelRecord),
    /// Stage channel
    Stage(StageChannelRecord),
}

impl ChannelRecord {
    /// Id of the channel this record was captured from.
    pub fn source_id(&self) -> Snowflake {
        match self {
            Self::Text(r) => r.source_id,
            Self::Voice(r) => r.source_id,
            Self::Stage(r) => r.source_id,
        }
    }

    /// Channel name.
    pub fn name(&self) -> &str {
        match self {
            Self::Text(r) => &r.name,
            Self::Voice(r) => &r.name,
            Self::Stage(r) => &r.name,
        }
    }

    /// Position within its parent.
    pub fn position(&self) -> i64 {
        match self {
            Self::Text(r) => r.position,
            Self::Voice(r) => r.position,
            Self::Stage(r) => r.position,
        }
    }

    /// Overwrite the source id, whatever the extractor set.
    pub fn tag_source(mut self, id: Snowflake) -> Self {
        match &mut self {
            Self::Text(r) => r.source_id = id,
            Self::Voice(r) => r.source_id = id,
            Self::Stage(r) => r.source_id = id,
        }
        self
    }
}

impl From<TextChannelRecord> for ChannelRecord {
    fn from(record: TextChannelRecord) -> Self {
        Self::Text(record)
    }
}

impl From<VoiceChannelRecord> for ChannelRecord {
    fn from(record: VoiceChannelRecord) -> Self {
        Self::Voice(record)
    }
}

impl From<StageChannelRecord> for ChannelRecord {
    fn from(record: StageChannelRecord) -> Self {
        Self::Stage(record)
    }
}

/// A category and its captured children, ascending by position.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    source_id: Snowflake,
    name: String,
    position: i64,
    permissions: Vec<PermissionOverwriteRecord>,
    children: Vec<ChannelRecord>,
}

/// Every captured channel, grouped under its category or in `others`.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct ChannelTree {
    categories: Vec<CategoryRecord>,
    others: Vec<ChannelRecord>,
}

impl ChannelTree {
    /// All captured non-category channels, categorized first.
    pub fn channels(&self) -> impl Iterator<Item = &ChannelRecord> {
        self.categories
            .iter()
            .flat_map(|c| c.children.iter())
            .chain(self.others.iter())
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.others.is_empty()
    }
}
