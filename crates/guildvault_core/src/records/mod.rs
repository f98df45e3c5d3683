//! Backup records.
//!
//! Records are the restorable projection of remote entities. They serialize
//! with camelCase keys and string ids.

mod automod;
mod channel;
mod emoji;
mod media;
mod member;
mod message;
mod role;
mod snapshot;

pub use automod::{
    ActionMetadataRecord, ActionRecord, AutoModerationRuleRecord,
    AutoModerationRuleRecordBuilder, ExemptEntry,
};
pub use channel::{
    CategoryRecord, ChannelRecord, ChannelTree, PermissionOverwriteRecord, StageChannelRecord,
    StageChannelRecordBuilder, TextChannelRecord, TextChannelRecordBuilder, VoiceChannelRecord,
};
pub use emoji::EmojiRecord;
pub use media::MediaPayload;
pub use member::{BanRecord, MemberRecord};
pub use message::{FileRecord, MessageRecord, MessageRecordBuilder, ThreadRecord, ThreadRecordBuilder};
pub use role::{RoleRecord, RoleRecordBuilder};
pub use snapshot::{
    AfkRecord, GuildInfoRecord, GuildInfoRecordBuilder, GuildSnapshot, GuildSnapshotBuilder,
    WidgetRecord,
};
