//! The top-level snapshot.

use crate::{
    AutoModerationRuleRecord, BanRecord, ChannelTree, EmojiRecord, MediaPayload, MemberRecord,
    RoleRecord, Snowflake,
};
use serde::{Deserialize, Serialize};

/// Idle channel settings.
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
pub struct AfkRecord {
    /// AFK channel name
    name: String,
    /// Seconds before an idle member is moved
    timeout: u32,
}

/// Server widget settings.
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
pub struct WidgetRecord {
    enabled: bool,
    /// Invite channel name
    channel: Option<String>,
}

/// Guild-level settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GuildInfoRecord {
    name: String,
    #[builder(default)]
    icon: Option<MediaPayload>,
    #[builder(default)]
    splash: Option<MediaPayload>,
    #[builder(default)]
    banner: Option<MediaPayload>,
    #[builder(default)]
    verification_level: u8,
    #[builder(default)]
    explicit_content_filter: u8,
    #[builder(default)]
    default_message_notifications: u8,
    #[builder(default)]
    afk: Option<AfkRecord>,
    #[builder(default)]
    widget: Option<WidgetRecord>,
}

/// A complete configuration backup of one guild.
///
/// Disabled sections serialize as empty collections.
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
pub struct GuildSnapshot {
    /// Backup id
    id: String,
    guild_id: Snowflake,
    /// When the snapshot was taken, milliseconds since the Unix epoch
    created_timestamp: i64,
    #[serde(flatten)]
    info: GuildInfoRecord,
    #[builder(default)]
    channels: ChannelTree,
    #[builder(default)]
    roles: Vec<RoleRecord>,
    #[builder(default)]
    bans: Vec<BanRecord>,
    #[builder(default)]
    emojis: Vec<EmojiRecord>,
    #[builder(default)]
    members: Vec<MemberRecord>,
    #[builder(default)]
    auto_moderation_rules: Vec<AutoModerationRuleRecord>,
}
