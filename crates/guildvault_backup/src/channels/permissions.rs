//! Permission overwrite snapshots.

use crate::GuildCache;
use guildvault_core::{GuildChannel, OverwriteType, PermissionOverwriteRecord};
use tracing::debug;

/// Role-scoped overwrites of `channel`, keyed by role name.
///
/// Member overwrites and overwrites of deleted roles are left out.
pub fn snapshot_permissions(
    channel: &GuildChannel,
    cache: &GuildCache,
) -> Vec<PermissionOverwriteRecord> {
    channel
        .permission_overwrites()
        .iter()
        .filter(|overwrite| *overwrite.kind() == OverwriteType::Role)
        .filter_map(|overwrite| match cache.role_name(*overwrite.id()) {
            Some(role_name) => Some(PermissionOverwriteRecord::new(
                role_name.to_string(),
                overwrite.allow().to_string(),
                overwrite.deny().to_string(),
            )),
            None => {
                debug!(
                    channel_id = %channel.id(),
                    role_id = %overwrite.id(),
                    "Dropping overwrite for deleted role"
                );
                None
            }
        })
        .collect()
}
