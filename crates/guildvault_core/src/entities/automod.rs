//! Auto-moderation rules.

use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Extra data attached to an auto-moderation action.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct ActionMetadata {
    /// Channel alerts are sent to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel_id: Option<Snowflake>,
    /// Timeout length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<u64>,
    /// Message shown to the blocked user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_message: Option<String>,
}

/// An action taken when a rule triggers.
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
pub struct AutoModerationAction {
    /// Action type tag
    #[serde(rename = "type")]
    kind: u8,
    /// Action parameters
    #[serde(default)]
    #[builder(default)]
    metadata: ActionMetadata,
}

/// An auto-moderation rule.
///
/// Exempt lists may still name roles or channels that were deleted after
/// the rule was written.
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
pub struct AutoModerationRule {
    /// Rule id
    id: Snowflake,
    /// Rule name
    name: String,
    /// Event the rule listens for
    #[serde(default)]
    #[builder(default)]
    event_type: u8,
    /// Trigger type tag
    #[serde(default)]
    #[builder(default)]
    trigger_type: u8,
    /// Trigger parameters, kept verbatim
    #[serde(default)]
    #[builder(default)]
    trigger_metadata: JsonValue,
    /// Actions to take
    #[serde(default)]
    #[builder(default)]
    actions: Vec<AutoModerationAction>,
    /// Whether the rule is active
    #[serde(default)]
    #[builder(default)]
    enabled: bool,
    /// Roles the rule ignores
    #[serde(default)]
    #[builder(default)]
    exempt_roles: Vec<Snowflake>,
    /// Channels the rule ignores
    #[serde(default)]
    #[builder(default)]
    exempt_channels: Vec<Snowflake>,
}
