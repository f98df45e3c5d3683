//! Per-section extractors.
//!
//! Each extractor issues one scheduled fetch for its collection and projects
//! the result into records. Image downloads, when enabled, are scheduled
//! separately per image.

mod automod;
mod bans;
mod emojis;
mod guild;
mod members;
mod roles;

pub use automod::{get_auto_moderation_rules, project_rule};
pub use bans::{get_bans, project_ban};
pub use emojis::{MAX_EMOJIS, get_emojis};
pub use guild::{fetch_guild, get_guild_info};
pub use members::{get_members, project_member};
pub use roles::{fetch_role_collection, get_roles, project_roles};
