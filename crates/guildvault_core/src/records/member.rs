//! Ban and member records.

use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// A banned user.
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
#[serde(rename_all = "camelCase")]
pub struct BanRecord {
    user_id: Snowflake,
    reason: Option<String>,
}

/// A guild member at snapshot time.
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
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    user_id: Snowflake,
    username: String,
    discriminator: String,
    avatar_url: Option<String>,
    /// Milliseconds since the Unix epoch
    joined_timestamp: i64,
    /// Role ids held at fetch time; order carries no meaning
    role_ids: Vec<Snowflake>,
    is_bot: bool,
}
