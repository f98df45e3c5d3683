//! Per-channel extractors.

use super::{fetch_message_records, project_thread, snapshot_permissions};
use crate::ExtractionContext;
use async_trait::async_trait;
use guildvault_core::{
    ChannelType, GuildChannel, PermissionOverwriteRecord, StageChannelRecord,
    StageChannelRecordBuilder, TextChannelRecord, TextChannelRecordBuilder, VoiceChannelRecord,
};
use guildvault_error::{GuildVaultResult, RecordError};
use tracing::instrument;

/// Builds the record for one channel of each supported type.
///
/// The tree builder decides which method a channel reaches. Text and stage
/// capture may fetch history and fail; voice capture and permission
/// snapshots are pure.
#[async_trait]
pub trait ChannelExtractor: Send + Sync {
    /// Capture a text or announcement channel.
    async fn text(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> GuildVaultResult<TextChannelRecord>;

    /// Capture a voice channel.
    fn voice(&self, channel: &GuildChannel, ctx: &ExtractionContext<'_>) -> VoiceChannelRecord;

    /// Capture a stage channel.
    async fn stage(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> GuildVaultResult<StageChannelRecord>;

    /// Capture role-scoped permission overwrites.
    fn permissions(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> Vec<PermissionOverwriteRecord>;
}

/// Captures channels with recent history and active threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChannelExtractor;

#[async_trait]
impl ChannelExtractor for StandardChannelExtractor {
    #[instrument(skip_all, fields(channel_id = %channel.id()))]
    async fn text(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> GuildVaultResult<TextChannelRecord> {
        let messages = fetch_message_records(*channel.id(), ctx).await?;

        let mut threads = Vec::new();
        for thread in ctx.threads_of(*channel.id()) {
            threads.push(project_thread(thread, ctx).await?);
        }

        TextChannelRecordBuilder::default()
            .source_id(*channel.id())
            .name(channel.name().clone())
            .position(*channel.position())
            .channel_type(*channel.kind())
            .nsfw(*channel.nsfw())
            .rate_limit_per_user(*channel.rate_limit_per_user())
            .parent(ctx.parent_name(channel))
            .topic(channel.topic().clone())
            .permissions(self.permissions(channel, ctx))
            .is_news(*channel.kind() == ChannelType::Announcement)
            .messages(messages)
            .threads(threads)
            .build()
            .map_err(|e| {
                RecordError::new(format!("Failed to build text channel {}: {}", channel.id(), e))
                    .into()
            })
    }

    fn voice(&self, channel: &GuildChannel, ctx: &ExtractionContext<'_>) -> VoiceChannelRecord {
        VoiceChannelRecord::new(
            *channel.id(),
            channel.name().clone(),
            *channel.position(),
            *channel.bitrate(),
            *channel.user_limit(),
            ctx.parent_name(channel),
            self.permissions(channel, ctx),
        )
    }

    #[instrument(skip_all, fields(channel_id = %channel.id()))]
    async fn stage(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> GuildVaultResult<StageChannelRecord> {
        let messages = fetch_message_records(*channel.id(), ctx).await?;

        StageChannelRecordBuilder::default()
            .source_id(*channel.id())
            .name(channel.name().clone())
            .position(*channel.position())
            .nsfw(*channel.nsfw())
            .rate_limit_per_user(*channel.rate_limit_per_user())
            .topic(channel.topic().clone())
            .bitrate(*channel.bitrate())
            .user_limit(*channel.user_limit())
            .parent(ctx.parent_name(channel))
            .permissions(self.permissions(channel, ctx))
            .messages(messages)
            .build()
            .map_err(|e| {
                RecordError::new(format!("Failed to build stage channel {}: {}", channel.id(), e))
                    .into()
            })
    }

    fn permissions(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> Vec<PermissionOverwriteRecord> {
        snapshot_permissions(channel, ctx.cache)
    }
}
