//! One-call backup against the live API.

use crate::GuildVaultConfig;
use guildvault_backup::{StandardChannelExtractor, create_snapshot};
use guildvault_core::GuildSnapshot;
use guildvault_discord::{DiscordRestClient, HttpImageFetcher};
use guildvault_error::GuildVaultResult;
use guildvault_rate_limit::Scheduler;
use tracing::{info, instrument};

/// Snapshot the configured guild through the REST API.
#[instrument(skip_all)]
pub async fn run_backup(config: &GuildVaultConfig) -> GuildVaultResult<GuildSnapshot> {
    let guild_id = config.require_guild_id()?;
    let source = DiscordRestClient::with_base_url(
        config.require_token()?,
        guild_id,
        config.discord().api_base().as_str(),
    )?;
    let images = HttpImageFetcher::new()?;
    let scheduler = Scheduler::new(config.scheduler().clone())?;

    info!(%guild_id, "Starting backup");
    create_snapshot(
        &source,
        config.backup(),
        &scheduler,
        &images,
        &StandardChannelExtractor,
    )
    .await
}
