//! Emoji extraction.

use crate::media::capture_image;
use futures::{StreamExt, TryStreamExt, stream};
use guildvault_core::{Emoji, EmojiRecord};
use guildvault_error::GuildVaultResult;
use guildvault_interface::{GuildSource, ImageFetcher};
use guildvault_rate_limit::{JobKey, Scheduler, jobs};
use tracing::{debug, instrument, warn};

/// Most emojis captured per snapshot.
pub const MAX_EMOJIS: usize = 50;

/// Fetch and project the guild's emojis.
///
/// The source collection is truncated to [`MAX_EMOJIS`] before any image is
/// fetched. Inline images are downloaded concurrently, bounded by the
/// scheduler's slot count, and the output keeps the source order. A failed
/// download fails the whole extraction.
#[instrument(skip_all, fields(guild_id = %source.guild_id(), inline = inline))]
pub async fn get_emojis(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
    images: &dyn ImageFetcher,
    inline: bool,
) -> GuildVaultResult<Vec<EmojiRecord>> {
    let mut emojis = scheduler
        .schedule(jobs::EMOJIS, || source.fetch_emojis())
        .await?;

    if emojis.len() > MAX_EMOJIS {
        debug!(
            count = emojis.len(),
            kept = MAX_EMOJIS,
            "Truncating emoji collection"
        );
        emojis.truncate(MAX_EMOJIS);
    }

    let concurrency = (*scheduler.config().max_concurrent()).max(1);
    let records: Vec<Option<EmojiRecord>> = stream::iter(emojis.iter())
        .map(|emoji| project_emoji(emoji, inline, scheduler, images))
        .buffered(concurrency)
        .try_collect()
        .await?;

    let records: Vec<EmojiRecord> = records.into_iter().flatten().collect();
    debug!(count = records.len(), "Captured emojis");
    Ok(records)
}

async fn project_emoji(
    emoji: &Emoji,
    inline: bool,
    scheduler: &Scheduler,
    images: &dyn ImageFetcher,
) -> GuildVaultResult<Option<EmojiRecord>> {
    let (Some(_), Some(url)) = (*emoji.id(), emoji.image_url()) else {
        warn!(name = ?emoji.name(), "Skipping emoji without an id");
        return Ok(None);
    };

    let job = JobKey::from(jobs::EMOJI_IMAGE);
    let image = capture_image(url, inline, job, scheduler, images).await?;
    let name = emoji.name().clone().unwrap_or_default();

    Ok(Some(EmojiRecord::new(name, image)))
}
