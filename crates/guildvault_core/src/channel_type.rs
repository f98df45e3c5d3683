//! Channel type tags.

use serde::{Deserialize, Serialize};

/// Channel type as reported by the remote API.
///
/// Unrecognised tags are kept as [`ChannelType::Unknown`] so a new channel
/// type never breaks deserialization of the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelType {
    /// Text channel in a guild
    Text,
    /// Direct message channel
    Dm,
    /// Voice channel in a guild
    Voice,
    /// Group direct message channel
    GroupDm,
    /// Category that contains channels
    Category,
    /// Announcement channel (formerly news channel)
    Announcement,
    /// Thread in an announcement channel
    AnnouncementThread,
    /// Public thread
    PublicThread,
    /// Private thread
    PrivateThread,
    /// Stage voice channel
    Stage,
    /// Hub directory channel
    Directory,
    /// Forum channel
    Forum,
    /// Media channel
    Media,
    /// Any tag this crate does not know about
    Unknown(u8),
}

impl From<u8> for ChannelType {
    fn from(tag: u8) -> Self {
        match tag {
            0 => Self::Text,
            1 => Self::Dm,
            2 => Self::Voice,
            3 => Self::GroupDm,
            4 => Self::Category,
            5 => Self::Announcement,
            10 => Self::AnnouncementThread,
            11 => Self::PublicThread,
            12 => Self::PrivateThread,
            13 => Self::Stage,
            14 => Self::Directory,
            15 => Self::Forum,
            16 => Self::Media,
            other => Self::Unknown(other),
        }
    }
}

impl From<ChannelType> for u8 {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text => 0,
            ChannelType::Dm => 1,
            ChannelType::Voice => 2,
            ChannelType::GroupDm => 3,
            ChannelType::Category => 4,
            ChannelType::Announcement => 5,
            ChannelType::AnnouncementThread => 10,
            ChannelType::PublicThread => 11,
            ChannelType::PrivateThread => 12,
            ChannelType::Stage => 13,
            ChannelType::Directory => 14,
            ChannelType::Forum => 15,
            ChannelType::Media => 16,
            ChannelType::Unknown(tag) => tag,
        }
    }
}

impl ChannelType {
    /// Whether this is one of the three thread types.
    pub fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }

    /// The backup variant this type maps to.
    pub fn kind(self) -> ChannelKind {
        match self {
            Self::Text | Self::Announcement => ChannelKind::Text,
            Self::Voice => ChannelKind::Voice,
            Self::Stage => ChannelKind::Stage,
            Self::Category => ChannelKind::Category,
            _ => ChannelKind::Unsupported,
        }
    }
}

/// Closed set of channel variants the backup understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ChannelKind {
    /// Text and announcement channels
    Text,
    /// Voice channels
    Voice,
    /// Stage channels
    Stage,
    /// Categories
    Category,
    /// Everything else
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tags_round_trip() {
        let kind: ChannelType = serde_json::from_str("99").unwrap();
        assert_eq!(kind, ChannelType::Unknown(99));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "99");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(ChannelType::Announcement.kind(), ChannelKind::Text);
        assert_eq!(ChannelType::Stage.kind(), ChannelKind::Stage);
        assert_eq!(ChannelType::Forum.kind(), ChannelKind::Unsupported);
        assert!(ChannelType::PrivateThread.is_thread());
        assert!(!ChannelType::Category.is_thread());
    }
}
