//! Users, guild members and bans.

use crate::{Snowflake, cdn};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct User {
    /// User id
    id: Snowflake,
    /// Username without the discriminator
    username: String,
    /// Legacy discriminator ("0" for migrated accounts)
    #[serde(default)]
    #[builder(default)]
    discriminator: String,
    /// Avatar hash
    #[serde(default)]
    #[builder(default)]
    avatar: Option<String>,
    /// Whether this is a bot account
    #[serde(default)]
    #[builder(default)]
    bot: bool,
}

impl User {
    /// CDN URL of the avatar, if the user set one.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_deref()
            .map(|hash| cdn::avatar_url(self.id, hash))
    }
}

/// A user's membership in a guild.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Member {
    /// The member's account
    user: User,
    /// Explicitly assigned role ids
    #[serde(default)]
    #[builder(default)]
    roles: Vec<Snowflake>,
    /// When the user joined the guild
    joined_at: DateTime<Utc>,
}

/// A ban entry.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Ban {
    /// Reason given by the moderator
    #[serde(default)]
    #[builder(default)]
    reason: Option<String>,
    /// The banned user
    user: User,
}
