//! Role records.

use crate::{Permissions, Snowflake};
use serde::{Deserialize, Serialize};

/// A restorable role.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct RoleRecord {
    /// Id of the role in the source guild
    source_id: Snowflake,
    name: String,
    /// `#rrggbb`
    color_hex: String,
    icon_url: Option<String>,
    hoist: bool,
    /// Serialized as a decimal string
    permissions_bitfield: Permissions,
    mentionable: bool,
    position: i64,
    /// The implicit role every member holds
    is_everyone_role: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_bitfield_as_string() {
        let record = RoleRecordBuilder::default()
            .source_id(Snowflake::new(7))
            .name("mods")
            .color_hex("#00ff00")
            .icon_url(None)
            .hoist(true)
            .permissions_bitfield(Permissions::from_bits(8))
            .mentionable(false)
            .position(3i64)
            .is_everyone_role(false)
            .build()
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["permissionsBitfield"], "8");
        assert_eq!(json["sourceId"], "7");
        assert_eq!(json["isEveryoneRole"], false);
    }
}
