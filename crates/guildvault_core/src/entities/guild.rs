//! Guild objects.

use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// Guild-level settings.
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
pub struct Guild {
    /// Guild id
    id: Snowflake,
    /// Guild name
    name: String,
    /// Icon hash
    #[serde(default)]
    #[builder(default)]
    icon: Option<String>,
    /// Invite splash hash
    #[serde(default)]
    #[builder(default)]
    splash: Option<String>,
    /// Banner hash
    #[serde(default)]
    #[builder(default)]
    banner: Option<String>,
    /// Verification level (0-4)
    #[serde(default)]
    #[builder(default)]
    verification_level: u8,
    /// Explicit content filter level (0-2)
    #[serde(default)]
    #[builder(default)]
    explicit_content_filter: u8,
    /// Default notification level (0-1)
    #[serde(default)]
    #[builder(default)]
    default_message_notifications: u8,
    /// AFK voice channel
    #[serde(default)]
    #[builder(default)]
    afk_channel_id: Option<Snowflake>,
    /// AFK timeout in seconds
    #[serde(default)]
    #[builder(default)]
    afk_timeout: u32,
    /// Whether the server widget is enabled
    #[serde(default)]
    #[builder(default)]
    widget_enabled: bool,
    /// Channel the widget invites to
    #[serde(default)]
    #[builder(default)]
    widget_channel_id: Option<Snowflake>,
}
