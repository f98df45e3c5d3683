//! Shared state handed to channel extractors.

use crate::{BackupOptions, GuildCache};
use guildvault_core::{GuildChannel, Snowflake};
use guildvault_interface::{GuildSource, ImageFetcher};
use guildvault_rate_limit::Scheduler;

/// Everything a channel extractor may read during one tree build.
#[derive(Clone, Copy)]
pub struct ExtractionContext<'a> {
    /// Guild being read
    pub source: &'a dyn GuildSource,
    /// Throttle for every remote call
    pub scheduler: &'a Scheduler,
    /// Image downloads for inline capture
    pub images: &'a dyn ImageFetcher,
    /// Capture options
    pub options: &'a BackupOptions,
    /// Channel and role lookups
    pub cache: &'a GuildCache,
    /// Active threads of the guild
    pub threads: &'a [GuildChannel],
}

impl<'a> ExtractionContext<'a> {
    /// Name of the parent category of `channel`, if it resolves.
    pub fn parent_name(&self, channel: &GuildChannel) -> Option<String> {
        (*channel.parent_id())
            .and_then(|id| self.cache.channel_name(id))
            .map(str::to_string)
    }

    /// Active threads whose parent is `channel_id`.
    pub fn threads_of(&self, channel_id: Snowflake) -> impl Iterator<Item = &'a GuildChannel> {
        self.threads
            .iter()
            .filter(move |thread| *thread.parent_id() == Some(channel_id))
    }
}

impl std::fmt::Debug for ExtractionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionContext")
            .field("guild_id", &self.source.guild_id())
            .field("options", self.options)
            .field("threads", &self.threads.len())
            .finish()
    }
}
