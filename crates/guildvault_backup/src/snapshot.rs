//! Snapshot assembly.

use crate::channels::{
    ChannelExtractor, build_channel_tree, fetch_active_threads, fetch_channel_collection,
};
use crate::extract::{
    fetch_guild, fetch_role_collection, get_auto_moderation_rules, get_bans, get_emojis,
    get_guild_info, get_members, project_roles,
};
use crate::{BackupOptions, BackupSection, ExclusionSpec, ExtractionContext, GuildCache};
use guildvault_core::{ChannelTree, GuildSnapshot, GuildSnapshotBuilder};
use guildvault_error::{GuildVaultResult, JsonError, RecordError};
use guildvault_interface::{GuildSource, ImageFetcher};
use guildvault_rate_limit::Scheduler;
use tracing::{info, instrument};

/// Capture a complete snapshot of the guild behind `source`.
///
/// The guild, its channels and (when any section needs them) its roles are
/// fetched once and feed both their own sections and the lookup cache. Bans,
/// members and emojis are captured concurrently. Sections listed in
/// `doNotBackup` issue no fetch and come out empty; members are captured only
/// when `backupMembers` is set. The first failed fetch aborts the snapshot.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn create_snapshot(
    source: &dyn GuildSource,
    options: &BackupOptions,
    scheduler: &Scheduler,
    images: &dyn ImageFetcher,
    extractor: &dyn ChannelExtractor,
) -> GuildVaultResult<GuildSnapshot> {
    let guild_id = source.guild_id();
    let inline = options.inline_images();
    let capture_roles = !options.skips(BackupSection::Roles);
    let capture_channels = !options.skips(BackupSection::Channels);
    let capture_rules = !options.skips(BackupSection::AutoModerationRules);

    info!("Creating guild snapshot");

    let guild = fetch_guild(source, scheduler).await?;
    let channels = fetch_channel_collection(source, scheduler).await?;
    let roles = if capture_roles || capture_channels || capture_rules {
        fetch_role_collection(source, scheduler).await?
    } else {
        Vec::new()
    };
    let threads = if capture_channels {
        fetch_active_threads(source, scheduler).await?
    } else {
        Vec::new()
    };
    let cache = GuildCache::new(channels.iter().cloned(), roles.iter().cloned());

    let info = get_guild_info(&guild, &cache, scheduler, images, inline).await?;

    let (bans, members, emojis) = tokio::try_join!(
        async {
            if options.skips(BackupSection::Bans) {
                Ok(Vec::new())
            } else {
                get_bans(source, scheduler).await
            }
        },
        async {
            if *options.backup_members() {
                get_members(source, scheduler).await
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if options.skips(BackupSection::Emojis) {
                Ok(Vec::new())
            } else {
                get_emojis(source, scheduler, images, inline).await
            }
        },
    )?;

    let role_records = if capture_roles {
        project_roles(&roles, guild_id)?
    } else {
        Vec::new()
    };

    let channel_tree = if capture_channels {
        let ctx = ExtractionContext {
            source,
            scheduler,
            images,
            options,
            cache: &cache,
            threads: &threads,
        };
        let exclusion = ExclusionSpec::from_options(options);
        build_channel_tree(&channels, &exclusion, &ctx, extractor).await?
    } else {
        ChannelTree::default()
    };

    let rules = if capture_rules {
        get_auto_moderation_rules(source, scheduler, &cache).await?
    } else {
        Vec::new()
    };

    let id = options
        .backup_id()
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let snapshot = GuildSnapshotBuilder::default()
        .id(id)
        .guild_id(guild_id)
        .created_timestamp(chrono::Utc::now().timestamp_millis())
        .info(info)
        .channels(channel_tree)
        .roles(role_records)
        .bans(bans)
        .emojis(emojis)
        .members(members)
        .auto_moderation_rules(rules)
        .build()
        .map_err(|e| RecordError::new(format!("Failed to build snapshot: {}", e)))?;

    info!(
        backup_id = %snapshot.id(),
        roles = snapshot.roles().len(),
        categories = snapshot.channels().categories().len(),
        bans = snapshot.bans().len(),
        emojis = snapshot.emojis().len(),
        members = snapshot.members().len(),
        rules = snapshot.auto_moderation_rules().len(),
        "Snapshot complete"
    );
    Ok(snapshot)
}

/// Serialize `snapshot` as JSON, pretty-printed when `beautify` is set.
pub fn to_json(snapshot: &GuildSnapshot, beautify: bool) -> GuildVaultResult<String> {
    let json = if beautify {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    };
    json.map_err(|e| JsonError::new(format!("Failed to serialize snapshot: {}", e)).into())
}
