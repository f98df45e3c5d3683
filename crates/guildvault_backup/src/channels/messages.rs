//! Channel history capture.

use crate::ExtractionContext;
use crate::media::{capture_image, is_image_file};
use guildvault_core::{
    FileRecord, GuildChannel, Message, MessageQuery, MessageRecord, MessageRecordBuilder,
    Snowflake, ThreadRecord, ThreadRecordBuilder,
};
use guildvault_error::{GuildVaultResult, RecordError};
use guildvault_rate_limit::{JobKey, jobs};
use tracing::{debug, instrument};

/// Largest page the remote API returns.
pub const MESSAGE_PAGE_LIMIT: u32 = 100;

/// Messages longer than this many characters cannot be replayed and are
/// skipped.
pub const MAX_MESSAGE_CONTENT: usize = 2000;

/// Capture up to `maxMessagesPerChannel` of the most recent messages,
/// returned oldest first.
///
/// Pages are requested newest first, each continuing before the oldest
/// message of the previous one. Paging stops at an empty or short page or
/// once the configured maximum has been read.
#[instrument(skip(ctx), fields(max = ctx.options.max_messages_per_channel()))]
pub async fn fetch_message_records(
    channel_id: Snowflake,
    ctx: &ExtractionContext<'_>,
) -> GuildVaultResult<Vec<MessageRecord>> {
    let max = *ctx.options.max_messages_per_channel();
    let job = JobKey::from(jobs::CHANNEL_MESSAGES).scoped(channel_id);

    let mut records = Vec::new();
    let mut read = 0u32;
    let mut before = None;

    while read < max {
        let limit = (max - read).min(MESSAGE_PAGE_LIMIT);
        let query = MessageQuery {
            limit: limit as u8,
            before,
        };
        let page = ctx
            .scheduler
            .schedule(job.clone(), || ctx.source.fetch_messages(channel_id, query))
            .await?;

        let page = &page[..page.len().min(limit as usize)];
        let Some(oldest) = page.last() else {
            break;
        };
        before = Some(*oldest.id());
        read += page.len() as u32;

        for message in page {
            if message.content().chars().count() > MAX_MESSAGE_CONTENT {
                debug!(message_id = %message.id(), "Skipping oversized message");
                continue;
            }
            records.push(project_message(message, ctx).await?);
        }

        if (page.len() as u32) < limit {
            break;
        }
    }

    records.reverse();
    debug!(count = records.len(), "Captured messages");
    Ok(records)
}

/// Project a message, capturing image attachments inline when enabled.
pub async fn project_message(
    message: &Message,
    ctx: &ExtractionContext<'_>,
) -> GuildVaultResult<MessageRecord> {
    let mut files = Vec::with_capacity(message.attachments().len());
    for attachment in message.attachments() {
        let inline = ctx.options.inline_images() && is_image_file(attachment.filename());
        let job = JobKey::from(jobs::ATTACHMENT);
        let payload = capture_image(
            attachment.url().clone(),
            inline,
            job,
            ctx.scheduler,
            ctx.images,
        )
        .await?;
        files.push(FileRecord::new(attachment.filename().clone(), payload));
    }

    let author = message.author();
    MessageRecordBuilder::default()
        .source_id(*message.id())
        .user_id(*author.id())
        .username(author.username().clone())
        .avatar_url(author.avatar_url())
        .content(message.content().clone())
        .embeds(message.embeds().clone())
        .components(message.components().clone())
        .files(files)
        .pinned(*message.pinned())
        .sent_at(message.timestamp().timestamp_millis())
        .build()
        .map_err(|e| {
            RecordError::new(format!("Failed to build message {}: {}", message.id(), e)).into()
        })
}

/// Capture an active thread with its recent history.
pub async fn project_thread(
    thread: &GuildChannel,
    ctx: &ExtractionContext<'_>,
) -> GuildVaultResult<ThreadRecord> {
    let metadata = (*thread.thread_metadata()).unwrap_or_default();
    let messages = fetch_message_records(*thread.id(), ctx).await?;

    ThreadRecordBuilder::default()
        .source_id(*thread.id())
        .name(thread.name().clone())
        .channel_type(*thread.kind())
        .archived(metadata.archived)
        .auto_archive_duration(metadata.auto_archive_duration)
        .locked(metadata.locked)
        .rate_limit_per_user(*thread.rate_limit_per_user())
        .messages(messages)
        .build()
        .map_err(|e| {
            RecordError::new(format!("Failed to build thread {}: {}", thread.id(), e)).into()
        })
}
