//! Remote guild access.

use async_trait::async_trait;
use guildvault_core::{
    AutoModerationRule, Ban, Emoji, Guild, GuildChannel, Member, Message, MessageQuery, Role,
    Snowflake,
};
use guildvault_error::GuildVaultResult;

/// Read-only access to one guild's collections.
///
/// Every method is one logical fetch. Implementations handle pagination
/// internally, except [`GuildSource::fetch_messages`] which returns a single
/// page so callers control how much history is read.
#[async_trait]
pub trait GuildSource: Send + Sync {
    /// Id of the guild this source reads.
    fn guild_id(&self) -> Snowflake;

    /// Fetch the guild object.
    async fn fetch_guild(&self) -> GuildVaultResult<Guild>;

    /// Fetch every ban.
    async fn fetch_bans(&self) -> GuildVaultResult<Vec<Ban>>;

    /// Fetch every member.
    async fn fetch_members(&self) -> GuildVaultResult<Vec<Member>>;

    /// Fetch every role, including the everyone role.
    async fn fetch_roles(&self) -> GuildVaultResult<Vec<Role>>;

    /// Fetch every custom emoji.
    async fn fetch_emojis(&self) -> GuildVaultResult<Vec<Emoji>>;

    /// Fetch every channel, categories included, threads excluded.
    async fn fetch_channels(&self) -> GuildVaultResult<Vec<GuildChannel>>;

    /// Fetch the guild's active threads.
    async fn fetch_active_threads(&self) -> GuildVaultResult<Vec<GuildChannel>>;

    /// Fetch one page of a channel's history, newest first.
    async fn fetch_messages(
        &self,
        channel_id: Snowflake,
        query: MessageQuery,
    ) -> GuildVaultResult<Vec<Message>>;

    /// Fetch every auto-moderation rule.
    async fn fetch_auto_moderation_rules(&self) -> GuildVaultResult<Vec<AutoModerationRule>>;
}
