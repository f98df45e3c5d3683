//! Guild configuration extraction.
//!
//! [`create_snapshot`] reads a guild through a
//! [`GuildSource`](guildvault_interface::GuildSource), throttled by a
//! [`Scheduler`](guildvault_rate_limit::Scheduler), and assembles a
//! [`GuildSnapshot`](guildvault_core::GuildSnapshot). The individual
//! extractors are public so a section can be captured on its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
pub mod channels;
mod context;
mod exclusion;
pub mod extract;
mod media;
mod options;
mod snapshot;

pub use cache::GuildCache;
pub use channels::{ChannelExtractor, StandardChannelExtractor, build_channel_tree, get_channels};
pub use context::ExtractionContext;
pub use exclusion::{ExclusionSpec, should_exclude};
pub use media::{IMAGE_EXTENSIONS, is_image_file};
pub use options::{BackupOptions, BackupOptionsBuilder, BackupSection, DoNotBackupEntry, ImageMode};
pub use snapshot::{create_snapshot, to_json};
