//! Entities as returned by the remote API.
//!
//! These mirror the wire format closely and are only ever read. Backup
//! records in [`crate::records`] are projected from them.

mod automod;
mod channel;
mod emoji;
mod guild;
mod message;
mod role;
mod user;

pub use automod::{
    ActionMetadata, ActionMetadataBuilder, AutoModerationAction, AutoModerationActionBuilder,
    AutoModerationRule, AutoModerationRuleBuilder,
};
pub use channel::{
    GuildChannel, GuildChannelBuilder, OverwriteType, PermissionOverwrite,
    PermissionOverwriteBuilder, ThreadMetadata,
};
pub use emoji::{Emoji, EmojiBuilder};
pub use guild::{Guild, GuildBuilder};
pub use message::{Attachment, AttachmentBuilder, Message, MessageBuilder, MessageQuery};
pub use role::{Role, RoleBuilder};
pub use user::{Ban, BanBuilder, Member, MemberBuilder, User, UserBuilder};
