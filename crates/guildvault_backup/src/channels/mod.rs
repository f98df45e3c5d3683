//! Channel tree construction.
//!
//! Categories and their children are walked in ascending position order and
//! each child is awaited before the next, so output order never depends on
//! fetch completion order. Two dispatch tables route a channel to an
//! extractor: one for children of a category and one for top-level channels.
//! They differ for stage channels, which only get the stage extractor under a
//! category and fall back to the voice extractor at the top level.

mod extractor;
mod messages;
mod permissions;

pub use extractor::{ChannelExtractor, StandardChannelExtractor};
pub use messages::{
    MAX_MESSAGE_CONTENT, MESSAGE_PAGE_LIMIT, fetch_message_records, project_message,
    project_thread,
};
pub use permissions::snapshot_permissions;

use crate::{ExclusionSpec, ExtractionContext, should_exclude};
use guildvault_core::{
    CategoryRecord, ChannelKind, ChannelRecord, ChannelTree, ChannelType, GuildChannel, Snowflake,
};
use guildvault_error::GuildVaultResult;
use guildvault_interface::GuildSource;
use guildvault_rate_limit::{Scheduler, jobs};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Extractor a channel is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ExtractorRoute {
    /// Text and announcement channels
    Text,
    /// Voice channels
    Voice,
    /// Stage channels
    Stage,
    /// Logged and skipped
    Unsupported,
}

/// Route for a channel under a category.
pub fn categorized_route(kind: ChannelKind) -> ExtractorRoute {
    match kind {
        ChannelKind::Text => ExtractorRoute::Text,
        ChannelKind::Voice => ExtractorRoute::Voice,
        ChannelKind::Stage => ExtractorRoute::Stage,
        ChannelKind::Category | ChannelKind::Unsupported => ExtractorRoute::Unsupported,
    }
}

/// Route for a channel outside any category.
///
/// Stage channels are captured as voice channels here. Forum, media and
/// unrecognised types are skipped rather than captured as voice channels, so
/// a top-level channel never produces a record its own type cannot describe.
pub fn uncategorized_route(kind: ChannelKind) -> ExtractorRoute {
    match kind {
        ChannelKind::Text => ExtractorRoute::Text,
        ChannelKind::Voice | ChannelKind::Stage => ExtractorRoute::Voice,
        ChannelKind::Category | ChannelKind::Unsupported => ExtractorRoute::Unsupported,
    }
}

/// Fetch the guild's channel collection.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn fetch_channel_collection(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
) -> GuildVaultResult<Vec<GuildChannel>> {
    let channels = scheduler
        .schedule(jobs::CHANNELS, || source.fetch_channels())
        .await?;
    debug!(count = channels.len(), "Fetched channels");
    Ok(channels)
}

/// Fetch the guild's active threads.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn fetch_active_threads(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
) -> GuildVaultResult<Vec<GuildChannel>> {
    let threads = scheduler
        .schedule(jobs::ACTIVE_THREADS, || source.fetch_active_threads())
        .await?;
    debug!(count = threads.len(), "Fetched active threads");
    Ok(threads)
}

/// Fetch the channel collection and build the tree from it.
///
/// Lookups resolve through `ctx.cache`, which the caller builds.
pub async fn get_channels(
    exclusion: &ExclusionSpec,
    ctx: &ExtractionContext<'_>,
    extractor: &dyn ChannelExtractor,
) -> GuildVaultResult<ChannelTree> {
    let channels = fetch_channel_collection(ctx.source, ctx.scheduler).await?;
    build_channel_tree(&channels, exclusion, ctx, extractor).await
}

/// Group `channels` into categories and top-level channels.
///
/// Threads never appear as nodes. An excluded category takes all of its
/// children with it. A channel whose parent is not a category in `channels`
/// is treated as top-level. The first extractor failure aborts the build.
#[instrument(skip_all, fields(guild_id = %ctx.source.guild_id(), channels = channels.len()))]
pub async fn build_channel_tree(
    channels: &[GuildChannel],
    exclusion: &ExclusionSpec,
    ctx: &ExtractionContext<'_>,
    extractor: &dyn ChannelExtractor,
) -> GuildVaultResult<ChannelTree> {
    let mut categories: Vec<&GuildChannel> = channels
        .iter()
        .filter(|channel| *channel.kind() == ChannelType::Category)
        .collect();
    sort_by_position(&mut categories);
    let category_ids: HashSet<Snowflake> = categories.iter().map(|c| *c.id()).collect();

    let mut category_records = Vec::with_capacity(categories.len());
    for category in categories {
        if should_exclude(category, exclusion) {
            debug!(category = %category.name(), "Skipping excluded category");
            continue;
        }

        let mut children: Vec<&GuildChannel> = channels
            .iter()
            .filter(|channel| is_tree_node(channel))
            .filter(|channel| *channel.parent_id() == Some(*category.id()))
            .collect();
        sort_by_position(&mut children);

        let mut records = Vec::with_capacity(children.len());
        for child in children {
            if should_exclude(child, exclusion) {
                debug!(channel = %child.name(), "Skipping excluded channel");
                continue;
            }
            let route = categorized_route(child.kind().kind());
            if let Some(record) = extract_channel(route, child, ctx, extractor).await? {
                records.push(record);
            }
        }

        category_records.push(CategoryRecord::new(
            *category.id(),
            category.name().clone(),
            *category.position(),
            extractor.permissions(category, ctx),
            records,
        ));
    }

    let mut others: Vec<&GuildChannel> = channels
        .iter()
        .filter(|channel| is_tree_node(channel))
        .filter(|channel| !(*channel.parent_id()).is_some_and(|id| category_ids.contains(&id)))
        .filter(|channel| !should_exclude(channel, exclusion))
        .collect();
    sort_by_position(&mut others);

    let mut other_records = Vec::with_capacity(others.len());
    for channel in others {
        let route = uncategorized_route(channel.kind().kind());
        if let Some(record) = extract_channel(route, channel, ctx, extractor).await? {
            other_records.push(record);
        }
    }

    debug!(
        categories = category_records.len(),
        others = other_records.len(),
        "Built channel tree"
    );
    Ok(ChannelTree::new(category_records, other_records))
}

/// Run the extractor `route` names and tag the record with its source id.
async fn extract_channel(
    route: ExtractorRoute,
    channel: &GuildChannel,
    ctx: &ExtractionContext<'_>,
    extractor: &dyn ChannelExtractor,
) -> GuildVaultResult<Option<ChannelRecord>> {
    let record: ChannelRecord = match route {
        ExtractorRoute::Text => extractor.text(channel, ctx).await?.into(),
        ExtractorRoute::Voice => extractor.voice(channel, ctx).into(),
        ExtractorRoute::Stage => extractor.stage(channel, ctx).await?.into(),
        ExtractorRoute::Unsupported => {
            warn!(
                channel_id = %channel.id(),
                channel_type = u8::from(*channel.kind()),
                "Unsupported channel type"
            );
            return Ok(None);
        }
    };
    Ok(Some(record.tag_source(*channel.id())))
}

fn is_tree_node(channel: &GuildChannel) -> bool {
    let kind = *channel.kind();
    kind != ChannelType::Category && !kind.is_thread()
}

fn sort_by_position(channels: &mut [&GuildChannel]) {
    channels.sort_by_key(|channel| *channel.position());
}
