//! Guild metadata extraction.

use crate::GuildCache;
use crate::media::capture_image;
use guildvault_core::{
    AfkRecord, Guild, GuildInfoRecord, GuildInfoRecordBuilder, MediaPayload, Snowflake,
    WidgetRecord, cdn,
};
use guildvault_error::{GuildVaultResult, RecordError};
use guildvault_interface::{GuildSource, ImageFetcher};
use guildvault_rate_limit::{JobKey, Scheduler, jobs};
use tracing::{debug, instrument};

/// Fetch the guild object.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn fetch_guild(source: &dyn GuildSource, scheduler: &Scheduler) -> GuildVaultResult<Guild> {
    let guild = scheduler.schedule(jobs::GUILD, || source.fetch_guild()).await?;
    debug!(name = %guild.name(), "Fetched guild");
    Ok(guild)
}

/// Project guild-level settings.
///
/// Icon, splash and banner are inlined when `inline` is set. AFK and widget
/// channels are resolved to names through `cache`.
pub async fn get_guild_info(
    guild: &Guild,
    cache: &GuildCache,
    scheduler: &Scheduler,
    images: &dyn ImageFetcher,
    inline: bool,
) -> GuildVaultResult<GuildInfoRecord> {
    let id = *guild.id();
    let capture = |kind: &'static str, hash: Option<String>, url: fn(Snowflake, &str) -> String| {
        let job = JobKey::from(jobs::GUILD_IMAGE).scoped(kind);
        async move {
            match hash {
                Some(hash) => capture_image(url(id, &hash), inline, job, scheduler, images)
                    .await
                    .map(Some),
                None => Ok::<Option<MediaPayload>, _>(None),
            }
        }
    };

    let icon = capture("icon", guild.icon().clone(), cdn::guild_icon_url).await?;
    let splash = capture("splash", guild.splash().clone(), cdn::guild_splash_url).await?;
    let banner = capture("banner", guild.banner().clone(), cdn::guild_banner_url).await?;

    let afk = (*guild.afk_channel_id())
        .and_then(|channel| cache.channel_name(channel))
        .map(|name| AfkRecord::new(name.to_string(), *guild.afk_timeout()));
    let widget_channel = (*guild.widget_channel_id())
        .and_then(|channel| cache.channel_name(channel))
        .map(str::to_string);

    GuildInfoRecordBuilder::default()
        .name(guild.name().clone())
        .icon(icon)
        .splash(splash)
        .banner(banner)
        .verification_level(*guild.verification_level())
        .explicit_content_filter(*guild.explicit_content_filter())
        .default_message_notifications(*guild.default_message_notifications())
        .afk(afk)
        .widget(Some(WidgetRecord::new(*guild.widget_enabled(), widget_channel)))
        .build()
        .map_err(|e| RecordError::new(format!("Failed to build guild info: {}", e)).into())
}
