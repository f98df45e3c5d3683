//! Backup options.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How images are stored in a snapshot.
///
/// Any configured value other than `"base64"` means images are kept as URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageMode {
    /// Download and inline image bytes
    Base64,
    /// Keep the CDN URL
    #[default]
    Url,
}

impl From<String> for ImageMode {
    fn from(value: String) -> Self {
        if value == "base64" {
            Self::Base64
        } else {
            Self::Url
        }
    }
}

impl From<ImageMode> for String {
    fn from(mode: ImageMode) -> Self {
        match mode {
            ImageMode::Base64 => "base64".to_string(),
            ImageMode::Url => "url".to_string(),
        }
    }
}

/// A snapshot section that can be opted out of.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BackupSection {
    /// Banned users
    Bans,
    /// Roles
    Roles,
    /// Custom emojis
    Emojis,
    /// The channel tree
    Channels,
    /// Auto-moderation rules
    AutoModerationRules,
}

/// One `doNotBackup` entry: a whole section, or a list of channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoNotBackupEntry {
    /// Channel names or ids to leave out of the channel tree
    Channels {
        /// Names or ids, matched exactly
        channels: Vec<String>,
    },
    /// A section to leave out entirely
    Section(BackupSection),
}

/// What to capture and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(rename_all = "camelCase", default)]
#[builder(setter(into), default)]
pub struct BackupOptions {
    /// Snapshot id, generated when absent
    backup_id: Option<String>,
    /// History captured per text or stage channel and per thread
    max_messages_per_channel: u32,
    /// Inline or URL images
    save_images: ImageMode,
    /// Sections and channels to leave out
    do_not_backup: Vec<DoNotBackupEntry>,
    /// Whether members are captured
    backup_members: bool,
    /// Pretty-print the serialized snapshot
    json_beautify: bool,
}

impl Default for BackupOptions {
    fn default() -> Self {
        Self {
            backup_id: None,
            max_messages_per_channel: 10,
            save_images: ImageMode::Url,
            do_not_backup: Vec::new(),
            backup_members: false,
            json_beautify: true,
        }
    }
}

impl BackupOptions {
    /// Whether `section` is listed in `doNotBackup`.
    pub fn skips(&self, section: BackupSection) -> bool {
        self.do_not_backup
            .iter()
            .any(|entry| matches!(entry, DoNotBackupEntry::Section(s) if *s == section))
    }

    /// Whether images are downloaded and inlined.
    pub fn inline_images(&self) -> bool {
        self.save_images == ImageMode::Base64
    }
}
