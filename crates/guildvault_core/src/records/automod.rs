//! Auto-moderation rule records.

use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A role or channel reference that resolved at snapshot time.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct ExemptEntry {
    id: Snowflake,
    name: String,
}

/// Action parameters with the alert channel resolved to a name when possible.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct ActionMetadataRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_message: Option<String>,
}

/// An action taken when a rule triggers.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    action_type: u8,
    metadata: ActionMetadataRecord,
}

/// A restorable auto-moderation rule.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct AutoModerationRuleRecord {
    name: String,
    event_type: u8,
    trigger_type: u8,
    #[builder(default)]
    trigger_metadata: JsonValue,
    #[builder(default)]
    actions: Vec<ActionRecord>,
    #[builder(default)]
    enabled: bool,
    #[builder(default)]
    exempt_roles: Vec<ExemptEntry>,
    #[builder(default)]
    exempt_channels: Vec<ExemptEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_channel_reference_omits_name() {
        let metadata =
            ActionMetadataRecord::new(Some(Snowflake::new(4)), None, None, None);
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({"channelId": "4"}));
    }
}
