//! Guild roles.

use crate::{Permissions, Snowflake, cdn};
use serde::{Deserialize, Serialize};

/// A guild role.
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
pub struct Role {
    /// Role id (the everyone role shares the guild id)
    id: Snowflake,
    /// Role name
    name: String,
    /// RGB color as an integer, 0 for none
    #[serde(default)]
    #[builder(default)]
    color: u32,
    /// Displayed separately in the member list
    #[serde(default)]
    #[builder(default)]
    hoist: bool,
    /// Role icon hash
    #[serde(default)]
    #[builder(default)]
    icon: Option<String>,
    /// Position in the hierarchy, higher is more senior
    #[serde(default)]
    #[builder(default)]
    position: i64,
    /// Permission bitfield
    #[serde(default)]
    #[builder(default)]
    permissions: Permissions,
    /// Owned by an integration
    #[serde(default)]
    #[builder(default)]
    managed: bool,
    /// Can be mentioned by everyone
    #[serde(default)]
    #[builder(default)]
    mentionable: bool,
}

impl Role {
    /// Color as `#rrggbb`.
    pub fn hex_color(&self) -> String {
        format!("#{:06x}", self.color & 0x00ff_ffff)
    }

    /// CDN URL of the role icon, if set.
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_deref()
            .map(|hash| cdn::role_icon_url(self.id, hash))
    }
}
