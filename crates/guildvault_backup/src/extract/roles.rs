//! Role extraction.

use guildvault_core::{Role, RoleRecord, RoleRecordBuilder, Snowflake};
use guildvault_error::{GuildVaultResult, RecordError};
use guildvault_interface::GuildSource;
use guildvault_rate_limit::{Scheduler, jobs};
use tracing::{debug, instrument};

/// Fetch the raw role collection.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn fetch_role_collection(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
) -> GuildVaultResult<Vec<Role>> {
    let roles = scheduler.schedule(jobs::ROLES, || source.fetch_roles()).await?;
    debug!(count = roles.len(), "Fetched roles");
    Ok(roles)
}

/// Fetch and project every role.
pub async fn get_roles(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
) -> GuildVaultResult<Vec<RoleRecord>> {
    let roles = fetch_role_collection(source, scheduler).await?;
    project_roles(&roles, source.guild_id())
}

/// Drop managed roles and order the rest by descending position.
///
/// Roles sharing a position keep their input order. The role whose id equals
/// `guild_id` is flagged as the everyone role.
pub fn project_roles(roles: &[Role], guild_id: Snowflake) -> GuildVaultResult<Vec<RoleRecord>> {
    let mut kept: Vec<&Role> = roles.iter().filter(|role| !*role.managed()).collect();
    kept.sort_by(|a, b| b.position().cmp(a.position()));

    kept.into_iter()
        .map(|role| project_role(role, guild_id))
        .collect()
}

fn project_role(role: &Role, guild_id: Snowflake) -> GuildVaultResult<RoleRecord> {
    RoleRecordBuilder::default()
        .source_id(*role.id())
        .name(role.name().clone())
        .color_hex(role.hex_color())
        .icon_url(role.icon_url())
        .hoist(*role.hoist())
        .permissions_bitfield(*role.permissions())
        .mentionable(*role.mentionable())
        .position(*role.position())
        .is_everyone_role(*role.id() == guild_id)
        .build()
        .map_err(|e| RecordError::new(format!("Failed to build role {}: {}", role.id(), e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guildvault_core::RoleBuilder;

    fn role(id: u64, position: i64, managed: bool) -> Role {
        RoleBuilder::default()
            .id(Snowflake::new(id))
            .name(format!("role-{id}"))
            .position(position)
            .managed(managed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_managed_roles_are_dropped_and_rest_sorted() {
        let roles = vec![
            role(1, 0, false),
            role(2, 5, true),
            role(3, 3, false),
            role(4, 7, false),
        ];
        let records = project_roles(&roles, Snowflake::new(1)).unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.source_id().get()).collect();
        assert_eq!(ids, [4, 3, 1]);
        assert!(records[2].is_everyone_role());
        assert!(!records[0].is_everyone_role());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let roles = vec![role(10, 2, false), role(11, 2, false), role(12, 2, false)];
        let records = project_roles(&roles, Snowflake::new(99)).unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.source_id().get()).collect();
        assert_eq!(ids, [10, 11, 12]);
    }
}
