//! Ban extraction.

use guildvault_core::{Ban, BanRecord};
use guildvault_error::GuildVaultResult;
use guildvault_interface::GuildSource;
use guildvault_rate_limit::{Scheduler, jobs};
use tracing::{debug, instrument};

/// Fetch and project every ban.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn get_bans(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
) -> GuildVaultResult<Vec<BanRecord>> {
    let bans = scheduler.schedule(jobs::BANS, || source.fetch_bans()).await?;
    debug!(count = bans.len(), "Fetched bans");
    Ok(bans.iter().map(project_ban).collect())
}

/// Project a ban.
pub fn project_ban(ban: &Ban) -> BanRecord {
    BanRecord::new(*ban.user().id(), ban.reason().clone())
}
