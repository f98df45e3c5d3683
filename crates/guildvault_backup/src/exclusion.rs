//! Channel exclusion.

use crate::{BackupOptions, DoNotBackupEntry};
use guildvault_core::{GuildChannel, Snowflake};

/// Channel names or ids to leave out of the channel tree.
///
/// Entries match exactly and case-sensitively, against either the display
/// name or the decimal id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSpec {
    entries: Vec<String>,
}

impl ExclusionSpec {
    /// Create a spec from raw entries.
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The first `doNotBackup` entry carrying a channel list, or an empty spec.
    pub fn from_options(options: &BackupOptions) -> Self {
        options
            .do_not_backup()
            .iter()
            .find_map(|entry| match entry {
                DoNotBackupEntry::Channels { channels } => Some(Self::new(channels.clone())),
                DoNotBackupEntry::Section(_) => None,
            })
            .unwrap_or_default()
    }

    /// Whether a resource with this name and id is listed.
    pub fn matches(&self, name: &str, id: Snowflake) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let id = id.to_string();
        self.entries.iter().any(|entry| entry == name || *entry == id)
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `channel` is listed in `spec` by name or id.
pub fn should_exclude(channel: &GuildChannel, spec: &ExclusionSpec) -> bool {
    spec.matches(channel.name(), *channel.id())
}
