//! Domain types for guildvault.
//!
//! [`entities`] mirror what the remote API returns. [`records`] are the
//! restorable projection written into a [`GuildSnapshot`].

#![forbid(unsafe_code)]

pub mod cdn;
mod channel_type;
pub mod entities;
mod permissions;
pub mod records;
mod snowflake;

pub use channel_type::{ChannelKind, ChannelType};
pub use entities::*;
pub use permissions::Permissions;
pub use records::*;
pub use snowflake::{DISCORD_EPOCH_MS, Snowflake};
