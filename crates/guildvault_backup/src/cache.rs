//! Read-only lookups built once per snapshot.

use guildvault_core::{GuildChannel, Role, Snowflake};
use std::collections::HashMap;

/// Channel and role lookups by id.
///
/// Built from the collections fetched at the start of a snapshot and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct GuildCache {
    channels: HashMap<Snowflake, GuildChannel>,
    roles: HashMap<Snowflake, Role>,
}

impl GuildCache {
    /// Index channels and roles by id.
    pub fn new(
        channels: impl IntoIterator<Item = GuildChannel>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            channels: channels.into_iter().map(|c| (*c.id(), c)).collect(),
            roles: roles.into_iter().map(|r| (*r.id(), r)).collect(),
        }
    }

    /// Channel by id.
    pub fn channel(&self, id: Snowflake) -> Option<&GuildChannel> {
        self.channels.get(&id)
    }

    /// Channel name by id.
    pub fn channel_name(&self, id: Snowflake) -> Option<&str> {
        self.channel(id).map(|c| c.name().as_str())
    }

    /// Role by id.
    pub fn role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.get(&id)
    }

    /// Role name by id.
    pub fn role_name(&self, id: Snowflake) -> Option<&str> {
        self.role(id).map(|r| r.name().as_str())
    }
}
