//! Job keys.

use std::fmt;

/// Stable name of a logical fetch, used to group and space related calls.
///
/// Keys are `"<operation>::<resource path>"`. Per-channel history fetches
/// append `"::<channel id>"` so each channel gets its own spacing cell. Image
/// downloads share one key per image class, which keeps the number of cells
/// bounded by the guild's channel count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::From)]
pub struct JobKey(String);

impl JobKey {
    /// Create a key from its full name.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Append a qualifier, typically the id of the entity being fetched.
    pub fn scoped(&self, qualifier: impl fmt::Display) -> Self {
        Self(format!("{}::{}", self.0, qualifier))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Well-known job keys.
pub mod jobs {
    /// Guild object fetch.
    pub const GUILD: &str = "getGuild::guild.fetch";
    /// Ban collection fetch.
    pub const BANS: &str = "getBans::guild.bans.fetch";
    /// Member collection fetch.
    pub const MEMBERS: &str = "getMembers::guild.members.fetch";
    /// Role collection fetch.
    pub const ROLES: &str = "getRoles::guild.roles.fetch";
    /// Emoji collection fetch.
    pub const EMOJIS: &str = "getEmojis::guild.emojis.fetch";
    /// Emoji image download, shared by every emoji.
    pub const EMOJI_IMAGE: &str = "getEmojis::emoji.image";
    /// Guild icon, splash and banner downloads, scoped by image kind.
    pub const GUILD_IMAGE: &str = "getGuild::guild.image";
    /// Channel collection fetch.
    pub const CHANNELS: &str = "getChannels::guild.channels.fetch";
    /// Active thread collection fetch.
    pub const ACTIVE_THREADS: &str = "getThreads::guild.threads.fetchActive";
    /// One page of channel history, scoped by channel id.
    pub const CHANNEL_MESSAGES: &str = "fetchChannelMessages::channel.messages.fetch";
    /// Message attachment download, shared by every attachment.
    pub const ATTACHMENT: &str = "fetchChannelMessages::attachment.fetch";
    /// Auto-moderation rule collection fetch.
    pub const AUTO_MODERATION_RULES: &str =
        "getAutoModerationRules::guild.autoModerationRules.fetch";
}
