//! Member extraction.

use guildvault_core::{Member, MemberRecord, Snowflake};
use guildvault_error::GuildVaultResult;
use guildvault_interface::GuildSource;
use guildvault_rate_limit::{Scheduler, jobs};
use tracing::{debug, instrument};

/// Fetch and project every member.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn get_members(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
) -> GuildVaultResult<Vec<MemberRecord>> {
    let members = scheduler
        .schedule(jobs::MEMBERS, || source.fetch_members())
        .await?;
    debug!(count = members.len(), "Fetched members");

    let guild_id = source.guild_id();
    Ok(members
        .iter()
        .map(|member| project_member(member, guild_id))
        .collect())
}

/// Project a member.
///
/// The everyone role (id equal to the guild id) is part of every member's
/// role set even though the API omits it.
pub fn project_member(member: &Member, guild_id: Snowflake) -> MemberRecord {
    let user = member.user();
    let mut role_ids = member.roles().clone();
    if !role_ids.contains(&guild_id) {
        role_ids.push(guild_id);
    }

    MemberRecord::new(
        *user.id(),
        user.username().clone(),
        user.discriminator().clone(),
        user.avatar_url(),
        member.joined_at().timestamp_millis(),
        role_ids,
        *user.bot(),
    )
}
