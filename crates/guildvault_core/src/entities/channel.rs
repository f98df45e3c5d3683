//! Guild channels and permission overwrites.

use crate::{ChannelType, Permissions, Snowflake};
use serde::{Deserialize, Serialize};

/// Target of a permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum OverwriteType {
    /// Applies to a role
    Role,
    /// Applies to a single member
    Member,
    /// Unrecognised tag
    Unknown(u8),
}

impl From<u8> for OverwriteType {
    fn from(tag: u8) -> Self {
        match tag {
            0 => Self::Role,
            1 => Self::Member,
            other => Self::Unknown(other),
        }
    }
}

impl From<OverwriteType> for u8 {
    fn from(kind: OverwriteType) -> Self {
        match kind {
            OverwriteType::Role => 0,
            OverwriteType::Member => 1,
            OverwriteType::Unknown(tag) => tag,
        }
    }
}

/// A per-channel permission overwrite.
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
pub struct PermissionOverwrite {
    /// Role or member id
    id: Snowflake,
    /// Whether `id` names a role or a member
    #[serde(rename = "type")]
    kind: OverwriteType,
    /// Explicitly granted permissions
    #[serde(default)]
    #[builder(default)]
    allow: Permissions,
    /// Explicitly denied permissions
    #[serde(default)]
    #[builder(default)]
    deny: Permissions,
}

/// Thread-only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThreadMetadata {
    /// Whether the thread is archived
    #[serde(default)]
    pub archived: bool,
    /// Minutes of inactivity before auto-archive
    #[serde(default)]
    pub auto_archive_duration: u32,
    /// Whether only moderators can unarchive
    #[serde(default)]
    pub locked: bool,
}

/// A channel, category or thread belonging to a guild.
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
pub struct GuildChannel {
    /// Channel id
    id: Snowflake,
    /// Channel type tag
    #[serde(rename = "type")]
    kind: ChannelType,
    /// Display name
    #[serde(default)]
    #[builder(default)]
    name: String,
    /// Sort position among siblings, lower is displayed first
    #[serde(default)]
    #[builder(default)]
    position: i64,
    /// Parent category (or parent channel for threads)
    #[serde(default)]
    #[builder(default)]
    parent_id: Option<Snowflake>,
    /// Channel topic
    #[serde(default)]
    #[builder(default)]
    topic: Option<String>,
    /// Age-restricted
    #[serde(default)]
    #[builder(default)]
    nsfw: bool,
    /// Slowmode in seconds
    #[serde(default)]
    #[builder(default)]
    rate_limit_per_user: u32,
    /// Voice bitrate in bits per second
    #[serde(default)]
    #[builder(default)]
    bitrate: Option<u32>,
    /// Voice user limit, 0 for unlimited
    #[serde(default)]
    #[builder(default)]
    user_limit: Option<u32>,
    /// Permission overwrites
    #[serde(default)]
    #[builder(default)]
    permission_overwrites: Vec<PermissionOverwrite>,
    /// Present on threads only
    #[serde(default)]
    #[builder(default)]
    thread_metadata: Option<ThreadMetadata>,
}
